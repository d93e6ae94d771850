//! Contract tests shared by every adapter, plus per-adapter and registry checks.

use lib::adapters::{
    claude_code_adapter, copilot_adapter, cursor_adapter, get_adapter, raw_adapter, Adapter,
    AdapterKind, AdapterOptions, ADAPTERS,
};
use lib::skills::{SkillDescription, SkillPack, Tier};
use std::collections::BTreeMap;

fn skill_pack() -> SkillPack {
    SkillPack {
        name: "test-skill".to_string(),
        version: "1.0.0".to_string(),
        category: "engineering".to_string(),
        tags: vec!["testing".to_string()],
        description: SkillDescription {
            short: "A test skill".to_string(),
            long: Some("A test skill for adapter validation.".to_string()),
        },
        context_budget: BTreeMap::from([
            (Tier::Minimal, 800),
            (Tier::Standard, 3200),
            (Tier::Comprehensive, 8000),
        ]),
        prompts: BTreeMap::from([
            (Tier::Minimal, "# Test Skill (Minimal)\n\nCore identity only.".to_string()),
            (Tier::Standard, "# Test Skill (Standard)\n\nFull behavioral prompt.".to_string()),
            (
                Tier::Comprehensive,
                "# Test Skill (Comprehensive)\n\nFull prompt with examples.".to_string(),
            ),
        ]),
        system_prompt: "# Test Skill (Standard)\n\nFull behavioral prompt.".to_string(),
        tier_used: Some(Tier::Standard),
        ..Default::default()
    }
}

fn all_adapters() -> [(&'static str, Adapter); 4] {
    [
        ("raw", raw_adapter as Adapter),
        ("cursor", cursor_adapter),
        ("claude-code", claude_code_adapter),
        ("copilot", copilot_adapter),
    ]
}

#[test]
fn every_adapter_returns_non_empty_files_and_summary() {
    let pack = skill_pack();
    for (name, adapter) in all_adapters() {
        let out = adapter(&pack, &AdapterOptions::default());
        assert!(!out.files.is_empty(), "{} produced no files", name);
        assert!(!out.summary.is_empty(), "{} produced no summary", name);
        assert!(!out.summary.contains('\n'), "{} summary spans lines", name);
        for file in &out.files {
            assert!(!file.path.is_empty(), "{} produced an empty path", name);
            assert!(!file.content.is_empty(), "{} produced empty content", name);
        }
    }
}

#[test]
fn every_adapter_embeds_the_resolved_prompt_verbatim() {
    let pack = skill_pack();
    for (name, adapter) in all_adapters() {
        for tier in Tier::ALL {
            let out = adapter(&pack, &AdapterOptions::with_tier(tier));
            let prompt = pack.prompt(tier).unwrap();
            assert!(
                out.files.iter().any(|f| f.content.contains(prompt)),
                "{} at {} lost its prompt",
                name,
                tier
            );
        }
    }
}

#[test]
fn tier_override_replaces_default_prompt() {
    let pack = skill_pack();
    for (name, adapter) in all_adapters() {
        let out = adapter(&pack, &AdapterOptions::with_tier(Tier::Minimal));
        let content = &out.files[0].content;
        assert!(content.contains("Core identity only."), "{}", name);
        assert!(!content.contains("Full behavioral prompt."), "{}", name);
    }
}

#[test]
fn adapters_are_deterministic() {
    let pack = skill_pack();
    for (name, adapter) in all_adapters() {
        let opts = AdapterOptions::with_tier(Tier::Comprehensive);
        assert_eq!(adapter(&pack, &opts), adapter(&pack, &opts), "{}", name);
    }
}

#[test]
fn missing_tier_falls_back_to_system_prompt() {
    let mut pack = skill_pack();
    pack.prompts.remove(&Tier::Comprehensive);
    for (name, adapter) in [
        ("raw", raw_adapter as Adapter),
        ("cursor", cursor_adapter),
        ("claude-code", claude_code_adapter),
    ] {
        let out = adapter(&pack, &AdapterOptions::with_tier(Tier::Comprehensive));
        assert!(
            out.files[0].content.ends_with(&pack.system_prompt),
            "{} did not fall back",
            name
        );
    }
}

#[test]
fn raw_writes_skill_named_markdown() {
    let pack = skill_pack();
    let out = raw_adapter(&pack, &AdapterOptions::default());
    assert_eq!(out.files[0].path, "test-skill.md");
    assert!(out.files[0].content.contains("Full behavioral prompt"));
    assert!(out.files[0].content.contains("test-skill"));
    assert!(out.files[0].content.contains("1.0.0"));
}

#[test]
fn cursor_writes_mdc_rule_with_front_matter() {
    let out = cursor_adapter(&skill_pack(), &AdapterOptions::with_tier(Tier::Minimal));
    assert_eq!(out.files.len(), 1);
    let file = &out.files[0];
    assert_eq!(file.path, ".cursor/rules/test-skill.mdc");
    assert!(file.path.starts_with(".cursor/rules/") && file.path.ends_with(".mdc"));
    assert_eq!(
        file.content,
        "---\ndescription: A test skill\nalwaysApply: false\n---\n\n# Test Skill (Minimal)\n\nCore identity only."
    );
    assert_eq!(out.summary, "Cursor rule: .cursor/rules/test-skill.mdc (tier: minimal)");
}

#[test]
fn claude_code_writes_claude_md() {
    let out = claude_code_adapter(&skill_pack(), &AdapterOptions::default());
    let claude_md = out
        .files
        .iter()
        .find(|f| f.path == "CLAUDE.md")
        .expect("CLAUDE.md");
    assert!(claude_md.content.starts_with("# CLAUDE.md\n"));
    assert!(claude_md.content.contains("## Installed Skill: test-skill"));
    assert!(claude_md.content.contains("**A test skill**"));
    assert!(claude_md.content.contains("Test Skill"));
}

#[test]
fn copilot_instructions_stay_short() {
    let out = copilot_adapter(&skill_pack(), &AdapterOptions::with_tier(Tier::Minimal));
    let file = out
        .files
        .iter()
        .find(|f| f.path == ".github/copilot-instructions.md")
        .expect("copilot instructions");
    assert!(file.content.split('\n').count() < 200);
    assert!(file.content.contains("A test skill"));
    assert!(file.content.contains("**test-skill** v1.0.0 (engineering)"));
}

#[test]
fn copilot_defaults_to_minimal_when_pack_has_no_tier() {
    let mut pack = skill_pack();
    pack.tier_used = None;
    let out = copilot_adapter(&pack, &AdapterOptions::default());
    assert!(out.files[0].content.contains("Core identity only."));

    let out = raw_adapter(&pack, &AdapterOptions::default());
    assert!(out.files[0].content.contains("Full behavioral prompt."));
}

#[test]
fn registry_exposes_every_adapter() {
    assert_eq!(ADAPTERS, ["raw", "cursor", "claude-code", "copilot"]);
    let pack = skill_pack();
    for (name, adapter) in all_adapters() {
        let found = get_adapter(name).expect("registered");
        assert_eq!(
            found(&pack, &AdapterOptions::default()),
            adapter(&pack, &AdapterOptions::default())
        );
        assert_eq!(name.parse::<AdapterKind>().unwrap().name(), name);
    }
}

#[test]
fn registry_rejects_unknown_adapter() {
    let err = get_adapter("bogus").unwrap_err();
    assert!(err.to_string().to_lowercase().contains("unknown adapter"));
    assert!(get_adapter("unknown-adapter").is_err());
}

#[test]
fn adapters_run_concurrently_without_coordination() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SkillPack>();
    assert_send_sync::<lib::adapters::AdapterOutput>();

    let pack = skill_pack();
    let expected: Vec<_> = all_adapters()
        .iter()
        .map(|(_, a)| a(&pack, &AdapterOptions::default()))
        .collect();
    let pack = &pack;
    std::thread::scope(|s| {
        let handles: Vec<_> = all_adapters()
            .into_iter()
            .map(|(_, a)| s.spawn(move || a(pack, &AdapterOptions::default())))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}
