use super::*;

fn page_sections() -> Vec<SectionDeclaration> {
    vec![SectionDeclaration::new("odds", true), SectionDeclaration::new("injuries", false)]
}

#[test]
fn provide_accordion_reconciles_before_providing() {
    let owner = Owner::new();
    owner.with(|| {
        let accordion = provide_accordion(&UiConfig::default(), &page_sections());

        assert_eq!(accordion.with_untracked(|a| a.sections().len()), 2);
        assert!(accordion.with_untracked(|a| a.is_open("odds")));
        assert!(!accordion.with_untracked(|a| a.is_open("injuries")));
        assert!(accordion.with_untracked(|a| a.explicit_state().is_empty()));
    });
}

#[test]
fn provided_store_is_the_returned_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let accordion = provide_accordion(&UiConfig::default(), &page_sections());
        let Some(provided) = use_context::<RwSignal<PageAccordion>>() else {
            panic!("accordion store was not provided");
        };

        provided.update(|a| {
            a.toggle("injuries");
        });

        assert!(accordion.with_untracked(|a| a.is_open("injuries")));
    });
}

#[test]
fn section_class_marks_open_sections() {
    assert_eq!(section_class(true), "accordion__section accordion__section--open");
    assert_eq!(section_class(false), "accordion__section");
}
