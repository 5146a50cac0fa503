use super::*;
use time::{Date, Month};

fn filled() -> HorseForm {
    HorseForm {
        name: "Wendy".to_owned(),
        description: String::new(),
        date_of_birth: "2012-12-12".to_owned(),
        sex: Sex::Female,
        ..HorseForm::default()
    }
}

fn horse(id: i64, sex: Sex) -> Horse {
    Horse {
        id,
        name: format!("h{id}"),
        description: Some("desc".to_owned()),
        date_of_birth: Date::from_calendar_date(2001, Month::April, 2).unwrap(),
        sex,
        owner: Some(Owner { id: 9, first_name: "Max".to_owned(), last_name: "M".to_owned(), description: None }),
        image_id: Some(1),
        mother_id: Some(2),
        father_id: Some(3),
    }
}

#[test]
fn mode_selects_texts() {
    assert_eq!(FormMode::Create.heading(), "Create New Horse");
    assert_eq!(FormMode::Edit.heading(), "Edit Horse");
    assert_eq!(FormMode::Create.submit_label(), "Create");
    assert_eq!(FormMode::Edit.submit_label(), "Save");
    assert_eq!(FormMode::Create.action_finished(), "created");
    assert_eq!(FormMode::Edit.action_finished(), "edited");
}

#[test]
fn empty_description_is_omitted_from_payload() {
    let write = filled().to_write().unwrap();
    assert_eq!(write.description, None);
    assert!(write.form_fields().iter().all(|(k, _)| *k != "description"));
}

#[test]
fn whitespace_description_is_sent_as_typed() {
    let form = HorseForm { description: " ".to_owned(), ..filled() };
    assert_eq!(form.to_write().unwrap().description.as_deref(), Some(" "));
}

#[test]
fn blank_name_is_rejected() {
    let form = HorseForm { name: "  ".to_owned(), ..filled() };
    assert_eq!(form.to_write(), Err(FormProblems { name: true, date_of_birth: false }));
}

#[test]
fn unset_or_malformed_birth_date_is_rejected() {
    let form = HorseForm { date_of_birth: String::new(), ..filled() };
    assert_eq!(form.to_write(), Err(FormProblems { name: false, date_of_birth: true }));

    let form = HorseForm { date_of_birth: "12/12/2012".to_owned(), ..filled() };
    assert!(form.to_write().unwrap_err().date_of_birth);
}

#[test]
fn selected_relations_become_ids() {
    let form = HorseForm {
        owner: Some(Owner { id: 4, first_name: "A".to_owned(), last_name: "B".to_owned(), description: None }),
        mother: Some(horse(10, Sex::Female)),
        father: Some(horse(11, Sex::Male)),
        ..filled()
    };
    let write = form.to_write().unwrap();
    assert_eq!(write.owner_id, Some(4));
    assert_eq!(write.mother_id, Some(10));
    assert_eq!(write.father_id, Some(11));
}

#[test]
fn from_horse_prefills_fields_but_not_parents() {
    let form = HorseForm::from_horse(&horse(5, Sex::Male));
    assert_eq!(form.name, "h5");
    assert_eq!(form.description, "desc");
    assert_eq!(form.date_of_birth, "2001-04-02");
    assert_eq!(form.sex, Sex::Male);
    assert_eq!(form.owner.as_ref().map(|o| o.id), Some(9));
    assert!(form.mother.is_none());
    assert!(form.father.is_none());
}

#[test]
fn unresolved_parents_keep_their_ids_on_save() {
    let mut form = HorseForm::from_horse(&horse(5, Sex::Male));
    let write = form.to_write().unwrap();
    assert_eq!(write.mother_id, Some(2));
    assert_eq!(write.father_id, Some(3));

    let failure = form.resolve_parents(Err("boom"), Ok(Some(horse(3, Sex::Male))));
    assert_eq!(failure, Some("boom"));
    assert!(form.mother().is_none());
    assert_eq!(form.father().map(|f| f.id), Some(3));

    let write = form.to_write().unwrap();
    assert_eq!(write.mother_id, Some(2));
    assert_eq!(write.father_id, Some(3));
}

#[test]
fn resolved_parents_report_no_failure() {
    let mut form = HorseForm::from_horse(&horse(5, Sex::Male));
    let failure: Option<&str> = form.resolve_parents(Ok(Some(horse(2, Sex::Female))), Ok(Some(horse(3, Sex::Male))));
    assert_eq!(failure, None);
    assert_eq!(form.mother().map(|m| m.id), Some(2));
    assert_eq!(form.father().map(|f| f.id), Some(3));
}

#[test]
fn clearing_an_unresolved_parent_unlinks_it() {
    let mut form = HorseForm::from_horse(&horse(5, Sex::Male));
    assert_eq!(form.resolve_parents(Err(()), Err(())), Some(()));
    form.set_mother(None);
    form.set_father(Some(horse(12, Sex::Male)));

    let write = form.to_write().unwrap();
    assert_eq!(write.mother_id, None);
    assert_eq!(write.father_id, Some(12));
}
