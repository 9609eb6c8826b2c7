use super::*;
use crate::consts::{FONT_SELECT_ID, FONT_STORAGE_KEY};
use crate::memory_host::MemoryHost;

fn controller() -> FontController {
    FontController::new(&PageConfig::default())
}

fn page_with_select(value: &str) -> MemoryHost {
    MemoryHost::new().with_control(FONT_SELECT_ID, value)
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn current_presets_resolve_to_themselves() {
    for preset in FontPreset::ALL {
        assert_eq!(resolve_preset(preset.as_str()), preset);
    }
}

#[test]
fn legacy_names_migrate() {
    assert_eq!(resolve_preset("modern"), FontPreset::Default);
    assert_eq!(resolve_preset("editorial"), FontPreset::Grotesk);
    assert_eq!(resolve_preset("airy"), FontPreset::Grotesk);
}

#[test]
fn unknown_names_fall_back_to_default() {
    for raw in ["", "serif", "Mono", " tech", "comic-sans"] {
        assert_eq!(resolve_preset(raw), FontPreset::Default, "raw {raw:?}");
    }
}

#[test]
fn migrate_legacy_passes_unmapped_names_through() {
    assert_eq!(migrate_legacy("tech"), "tech");
    assert_eq!(migrate_legacy("grotesk"), "grotesk");
    assert_eq!(migrate_legacy("whatever"), "whatever");
    assert_eq!(migrate_legacy("airy"), "grotesk");
}

#[test]
fn resolve_stored_handles_missing_key() {
    assert_eq!(resolve_stored(None), FontPreset::Default);
    assert_eq!(resolve_stored(Some("editorial")), FontPreset::Grotesk);
}

#[test]
fn parse_rejects_legacy_names() {
    assert_eq!(FontPreset::parse("mono"), Some(FontPreset::Mono));
    assert_eq!(FontPreset::parse("airy"), None);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_sets_attribute_and_syncs_selector() {
    let mut host = page_with_select("default");
    let resolved = controller().apply(&mut host, "editorial", ApplyOptions::default());

    assert_eq!(resolved, FontPreset::Grotesk);
    assert_eq!(host.attribute(FONT_ATTRIBUTE), Some("grotesk"));
    assert_eq!(host.element(FONT_SELECT_ID).unwrap().value, "grotesk");
}

#[test]
fn apply_without_persist_leaves_storage_alone() {
    let mut host = page_with_select("default");
    controller().apply(&mut host, "mono", ApplyOptions::default());
    assert!(host.storage_writes.is_empty());
}

#[test]
fn apply_with_persist_stores_resolved_name() {
    let mut host = page_with_select("default");
    controller().apply(&mut host, "airy", ApplyOptions { persist: true });
    assert_eq!(host.stored(FONT_STORAGE_KEY), Some("grotesk"));
}

#[test]
fn apply_is_idempotent_for_valid_presets() {
    let mut host = page_with_select("default");
    let fonts = controller();

    fonts.apply(&mut host, "tech", ApplyOptions::default());
    let writes_after_first = host.value_writes.len();
    fonts.apply(&mut host, "tech", ApplyOptions::default());

    assert_eq!(host.attribute(FONT_ATTRIBUTE), Some("tech"));
    assert_eq!(host.value_writes.len(), writes_after_first);
}

#[test]
fn apply_skips_selector_write_when_already_matching() {
    let mut host = page_with_select("mono");
    controller().apply(&mut host, "mono", ApplyOptions::default());
    assert!(host.value_writes.is_empty());
}

#[test]
fn apply_without_selector_still_sets_attribute() {
    let mut host = MemoryHost::new();
    controller().apply(&mut host, "tech", ApplyOptions { persist: true });

    assert_eq!(host.attribute(FONT_ATTRIBUTE), Some("tech"));
    assert_eq!(host.stored(FONT_STORAGE_KEY), Some("tech"));
}

#[test]
fn apply_only_ever_writes_valid_presets() {
    let mut host = page_with_select("default");
    let fonts = controller();
    for raw in ["modern", "editorial", "airy", "bogus", "", "TECH", "grotesk"] {
        fonts.apply(&mut host, raw, ApplyOptions { persist: true });
        let applied = host.attribute(FONT_ATTRIBUTE).unwrap();
        assert!(FontPreset::parse(applied).is_some(), "{raw:?} applied {applied:?}");
        assert_eq!(host.element(FONT_SELECT_ID).unwrap().value, applied);
    }
}

// =============================================================
// initialize / change handling
// =============================================================

#[test]
fn initialize_migrates_stored_legacy_value_without_persisting() {
    let mut host = page_with_select("default").with_stored(FONT_STORAGE_KEY, "editorial");
    let initial = controller().initialize(&mut host);

    assert_eq!(initial, FontPreset::Grotesk);
    assert_eq!(host.attribute(FONT_ATTRIBUTE), Some("grotesk"));
    assert_eq!(host.element(FONT_SELECT_ID).unwrap().value, "grotesk");
    assert_eq!(host.stored(FONT_STORAGE_KEY), Some("editorial"));
    assert!(host.storage_writes.is_empty());
}

#[test]
fn initialize_with_invalid_stored_value_uses_default() {
    let mut host = page_with_select("tech").with_stored(FONT_STORAGE_KEY, "papyrus");
    assert_eq!(controller().initialize(&mut host), FontPreset::Default);
    assert_eq!(host.element(FONT_SELECT_ID).unwrap().value, "default");
}

#[test]
fn initialize_without_selector_forces_default_and_ignores_storage() {
    let mut host = MemoryHost::new().with_stored(FONT_STORAGE_KEY, "mono");
    host.storage_unavailable = true;

    assert_eq!(controller().initialize(&mut host), FontPreset::Default);
    assert_eq!(host.attribute(FONT_ATTRIBUTE), Some("default"));
}

#[test]
fn initialize_survives_unavailable_storage() {
    let mut host = page_with_select("default");
    host.storage_unavailable = true;
    assert_eq!(controller().initialize(&mut host), FontPreset::Default);
}

#[test]
fn selection_persists() {
    let mut host = page_with_select("default");
    let fonts = controller();
    fonts.initialize(&mut host);

    assert_eq!(fonts.on_selected(&mut host, "tech"), FontPreset::Tech);
    assert_eq!(host.attribute(FONT_ATTRIBUTE), Some("tech"));
    assert_eq!(host.stored(FONT_STORAGE_KEY), Some("tech"));
}

#[test]
fn initialize_treats_non_control_element_as_missing_selector() {
    let mut host = MemoryHost::new().with_element(FONT_SELECT_ID).with_stored(FONT_STORAGE_KEY, "mono");
    let fonts = controller();

    assert_eq!(fonts.initialize(&mut host), FontPreset::Default);
    assert_eq!(host.attribute(FONT_ATTRIBUTE), Some("default"));

    fonts.apply(&mut host, "tech", ApplyOptions::default());
    assert!(host.value_writes.is_empty());
    assert_eq!(host.element(FONT_SELECT_ID).unwrap().value, "");
}
