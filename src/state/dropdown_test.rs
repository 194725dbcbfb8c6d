use super::*;
use crate::state::accordion::{AccordionStore, SectionDeclaration};
use crate::util::storage::MemoryStore;

#[test]
fn dropdown_default_is_closed() {
    assert!(!DropdownState::default().is_open());
}

#[test]
fn toggle_flips_visibility() {
    let mut menu = DropdownState::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
}

#[test]
fn escape_closes_open_menu() {
    let mut menu = DropdownState { open: true };
    assert!(menu.handle_key("Escape"));
    assert!(!menu.is_open());
    assert!(!menu.handle_key("Escape"));
}

#[test]
fn outside_click_reports_whether_menu_was_open() {
    let mut menu = DropdownState { open: true };
    assert!(menu.handle_outside_click());
    assert!(!menu.handle_outside_click());
}

#[test]
fn closing_menu_leaves_section_choices_alone() {
    let mut sections = AccordionStore::new(MemoryStore::new(), "k");
    sections.reconcile_on_load(&[SectionDeclaration::new("odds", false)]);
    sections.toggle("odds");

    let mut menu = DropdownState { open: true };
    menu.handle_outside_click();

    assert!(sections.is_open("odds"));
    assert_eq!(sections.load().get("odds"), Some(&true));
}
