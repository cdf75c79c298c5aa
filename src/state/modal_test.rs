use super::*;

// =============================================================
// Helpers
// =============================================================

fn catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            { "id": "demo", "title": "Demo Project", "features": ["f1"], "techStack": ["X"] },
            { "id": "other", "title": "Other Project" }
        ]"#,
    )
    .unwrap()
}

fn modal() -> ModalState<&'static str> {
    ModalState::new(&Timings::default())
}

fn scheduled(effects: &[ModalEffect<&'static str>]) -> (Ticket, ModalTimer) {
    effects
        .iter()
        .find_map(|e| match e {
            ModalEffect::Schedule { ticket, timer, .. } => Some((*ticket, *timer)),
            _ => None,
        })
        .unwrap()
}

/// Drive a modal through open → reveal timer.
fn open_fully(modal: &mut ModalState<&'static str>, catalog: &Catalog, id: &str, trigger: &'static str) {
    let effects = modal.open(catalog, id, trigger);
    let (ticket, timer) = scheduled(&effects);
    modal.on_timer(ticket, timer);
}

// =============================================================
// Open
// =============================================================

#[test]
fn open_valid_project_renders_title_and_reveals() {
    let catalog = catalog();
    let mut modal = modal();
    let effects = modal.open(&catalog, "demo", "btn");

    assert_eq!(
        effects[0],
        ModalEffect::Render { project_id: "demo".to_owned(), title: "Demo Project".to_owned() }
    );
    assert_eq!(effects[1], ModalEffect::Show);
    assert_eq!(effects[2], ModalEffect::LockScroll);
    assert!(matches!(effects[3], ModalEffect::Schedule { delay_ms: 10, timer: ModalTimer::Reveal, .. }));
    assert!(modal.is_visible());
    assert!(!modal.is_active());
    assert!(modal.scroll_locked());
    assert_eq!(modal.project(), Some("demo"));
    assert_eq!(modal.trigger(), Some(&"btn"));
}

#[test]
fn reveal_timer_activates_and_focuses_close() {
    let catalog = catalog();
    let mut modal = modal();
    let effects = modal.open(&catalog, "demo", "btn");
    let (ticket, timer) = scheduled(&effects);

    let effects = modal.on_timer(ticket, timer);
    assert_eq!(effects, vec![ModalEffect::Activate, ModalEffect::FocusClose]);
    assert!(modal.is_active());
}

#[test]
fn open_unknown_project_leaves_state_unchanged() {
    let catalog = catalog();
    let mut modal = modal();
    assert!(modal.open(&catalog, "missing", "btn").is_empty());
    assert_eq!(modal.phase(), ModalPhase::Hidden);
    assert!(!modal.scroll_locked());
    assert_eq!(modal.trigger(), None);
}

#[test]
fn open_unknown_project_while_open_keeps_current_record() {
    let catalog = catalog();
    let mut modal = modal();
    open_fully(&mut modal, &catalog, "demo", "btn");
    assert!(modal.open(&catalog, "missing", "other-btn").is_empty());
    assert_eq!(modal.phase(), ModalPhase::Open);
    assert_eq!(modal.project(), Some("demo"));
    assert_eq!(modal.trigger(), Some(&"btn"));
}

// =============================================================
// Close
// =============================================================

#[test]
fn open_then_close_unlocks_scroll_and_restores_focus() {
    let catalog = catalog();
    let mut modal = modal();
    open_fully(&mut modal, &catalog, "demo", "btn");

    let effects = modal.close();
    assert_eq!(effects[0], ModalEffect::Deactivate);
    let (ticket, timer) = scheduled(&effects);
    assert!(matches!(effects[1], ModalEffect::Schedule { delay_ms: 300, timer: ModalTimer::Hide, .. }));
    assert!(modal.is_visible());

    let effects = modal.on_timer(ticket, timer);
    assert_eq!(
        effects,
        vec![ModalEffect::Hide, ModalEffect::UnlockScroll, ModalEffect::RestoreFocus("btn")]
    );
    assert_eq!(modal.phase(), ModalPhase::Hidden);
    assert!(!modal.scroll_locked());
    assert_eq!(modal.project(), None);
}

#[test]
fn close_while_hidden_is_noop() {
    let mut modal = modal();
    assert!(modal.close().is_empty());
}

#[test]
fn close_twice_schedules_one_hide() {
    let catalog = catalog();
    let mut modal = modal();
    open_fully(&mut modal, &catalog, "demo", "btn");
    assert!(!modal.close().is_empty());
    assert!(modal.close().is_empty());
}

#[test]
fn close_during_reveal_cancels_activation() {
    let catalog = catalog();
    let mut modal = modal();
    let effects = modal.open(&catalog, "demo", "btn");
    let (reveal, _) = scheduled(&effects);

    let effects = modal.close();
    let (hide, _) = scheduled(&effects);
    assert!(modal.on_timer(reveal, ModalTimer::Reveal).is_empty());
    assert!(!modal.is_active());

    let effects = modal.on_timer(hide, ModalTimer::Hide);
    assert!(effects.contains(&ModalEffect::UnlockScroll));
}

// =============================================================
// Escape
// =============================================================

#[test]
fn escape_closes_active_dialog() {
    let catalog = catalog();
    let mut modal = modal();
    open_fully(&mut modal, &catalog, "demo", "btn");
    let effects = modal.on_escape();
    assert_eq!(effects[0], ModalEffect::Deactivate);
    assert!(matches!(modal.phase(), ModalPhase::Closing { .. }));
}

#[test]
fn escape_without_active_dialog_does_nothing() {
    let catalog = catalog();
    let mut modal = modal();
    assert!(modal.on_escape().is_empty());

    // Revealing: displayed but not yet active.
    modal.open(&catalog, "demo", "btn");
    assert!(modal.on_escape().is_empty());
    assert!(matches!(modal.phase(), ModalPhase::Revealing { .. }));
}

// =============================================================
// Re-entrancy
// =============================================================

#[test]
fn reopen_during_close_cancels_pending_hide() {
    let catalog = catalog();
    let mut modal = modal();
    open_fully(&mut modal, &catalog, "demo", "btn");
    let effects = modal.close();
    let (stale_hide, _) = scheduled(&effects);

    let effects = modal.open(&catalog, "other", "btn-2");
    // Scroll is still locked from the first open, so it is not locked again.
    assert!(!effects.contains(&ModalEffect::LockScroll));
    let (reveal, timer) = scheduled(&effects);

    assert!(modal.on_timer(stale_hide, ModalTimer::Hide).is_empty());
    assert!(modal.scroll_locked());

    modal.on_timer(reveal, timer);
    assert!(modal.is_active());
    assert_eq!(modal.project(), Some("other"));
    assert_eq!(modal.trigger(), Some(&"btn-2"));
}

// =============================================================
// Trigger listeners
// =============================================================

#[test]
fn delegated_listener_takes_only_unbound_triggers() {
    assert!(TriggerListener::Delegated.claims(false));
    assert!(!TriggerListener::Delegated.claims(true));
}

#[test]
fn direct_listener_always_takes_its_trigger() {
    assert!(TriggerListener::Direct.claims(true));
}
