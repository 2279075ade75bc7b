use super::*;
use crate::util::validation::{
    EMAIL_INVALID, NAME_REQUIRED, NAME_TOO_LONG, PASSWORD_REQUIRED, PASSWORD_TOO_SHORT,
};

// =============================================================
// Helpers
// =============================================================

fn fill(form: &mut RegistrationForm, name: &str, email: &str, password: &str) {
    form.set_value(Field::Name, name.to_owned());
    form.set_value(Field::Email, email.to_owned());
    form.set_value(Field::Password, password.to_owned());
}

fn submit_collecting(form: &mut RegistrationForm) -> (SubmitOutcome, Vec<RegistrationInput>) {
    let mut sent = Vec::new();
    let outcome = form.handle_submit(|input| sent.push(input));
    (outcome, sent)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_form_is_blank() {
    let form = RegistrationForm::default();
    assert!(form.values().is_empty());
    assert!(form.errors().is_empty());
    assert_eq!(form.submit_count(), 0);
    assert!(!form.is_submitted());
    assert!(!form.is_submit_successful());
}

// =============================================================
// Rejected submits
// =============================================================

#[test]
fn empty_name_blocks_submission() {
    let mut form = RegistrationForm::default();
    fill(&mut form, "", "jane@example.com", "longenough1");

    let (outcome, sent) = submit_collecting(&mut form);

    assert_eq!(outcome, SubmitOutcome::Rejected(1));
    assert!(sent.is_empty());
    assert_eq!(form.error(Field::Name), Some(NAME_REQUIRED));
}

#[test]
fn malformed_email_blocks_submission() {
    let mut form = RegistrationForm::default();
    fill(&mut form, "Jane Doe", "jane.example.com", "longenough1");

    let (outcome, sent) = submit_collecting(&mut form);

    assert_eq!(outcome, SubmitOutcome::Rejected(1));
    assert!(sent.is_empty());
    assert_eq!(form.error(Field::Email), Some(EMAIL_INVALID));
}

#[test]
fn seven_char_password_blocks_submission() {
    let mut form = RegistrationForm::default();
    fill(&mut form, "Jane Doe", "jane@example.com", "1234567");

    let (outcome, sent) = submit_collecting(&mut form);

    assert_eq!(outcome, SubmitOutcome::Rejected(1));
    assert!(sent.is_empty());
    assert_eq!(form.error(Field::Password), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn rejected_submit_keeps_values() {
    let mut form = RegistrationForm::default();
    fill(&mut form, "Jane Doe", "nope", "longenough1");

    submit_collecting(&mut form);

    assert_eq!(form.value(Field::Name), "Jane Doe");
    assert_eq!(form.value(Field::Email), "nope");
    assert_eq!(form.value(Field::Password), "longenough1");
    assert!(form.is_submitted());
    assert!(!form.is_submit_successful());
}

#[test]
fn name_of_33_chars_is_rejected_with_max_length_message() {
    let mut form = RegistrationForm::default();
    fill(&mut form, &"n".repeat(33), "jane@example.com", "longenough1");

    let (outcome, sent) = submit_collecting(&mut form);

    assert_eq!(outcome, SubmitOutcome::Rejected(1));
    assert!(sent.is_empty());
    assert_eq!(form.error(Field::Name), Some(NAME_TOO_LONG));
}

// =============================================================
// Accepted submits
// =============================================================

#[test]
fn valid_submit_passes_input_once_and_resets() {
    let mut form = RegistrationForm::default();
    fill(&mut form, "Jane Doe", "jane@example.com", "longenough1");

    let (outcome, sent) = submit_collecting(&mut form);

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(
        sent,
        vec![RegistrationInput {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            password: "longenough1".to_owned(),
        }]
    );
    assert!(form.values().is_empty());
    assert!(form.errors().is_empty());
    assert!(form.is_submit_successful());
    assert!(!form.is_submitted());
}

#[test]
fn name_of_exactly_32_chars_is_accepted() {
    let mut form = RegistrationForm::default();
    fill(&mut form, &"n".repeat(32), "jane@example.com", "longenough1");

    let (outcome, sent) = submit_collecting(&mut form);

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(sent.len(), 1);
}

#[test]
fn values_are_still_present_while_on_valid_runs() {
    let mut form = RegistrationForm::default();
    fill(&mut form, "Jane Doe", "jane@example.com", "longenough1");

    let mut seen_name = String::new();
    form.handle_submit(|input| seen_name = input.name);

    assert_eq!(seen_name, "Jane Doe");
    assert_eq!(form.value(Field::Name), "");
}

#[test]
fn two_rapid_valid_submits_send_twice_and_reset_twice() {
    let mut form = RegistrationForm::default();
    let mut sent = Vec::new();

    fill(&mut form, "Jane Doe", "jane@example.com", "longenough1");
    form.handle_submit(|input| sent.push(input));
    assert!(form.values().is_empty());

    fill(&mut form, "John Roe", "john@example.com", "longenough2");
    form.handle_submit(|input| sent.push(input));
    assert!(form.values().is_empty());

    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].name, "Jane Doe");
    assert_eq!(sent[1].name, "John Roe");
    assert_eq!(form.submit_count(), 2);
}

#[test]
fn failed_submit_after_success_clears_success_flag() {
    let mut form = RegistrationForm::default();
    fill(&mut form, "Jane Doe", "jane@example.com", "longenough1");
    submit_collecting(&mut form);
    assert!(form.is_submit_successful());

    let (outcome, _) = submit_collecting(&mut form);

    assert_eq!(outcome, SubmitOutcome::Rejected(3));
    assert!(!form.is_submit_successful());
}

// =============================================================
// Re-validation on edit
// =============================================================

#[test]
fn edits_before_first_submit_show_no_errors() {
    let mut form = RegistrationForm::default();
    form.set_value(Field::Email, "not-an-email".to_owned());
    assert!(form.errors().is_empty());
}

#[test]
fn correcting_a_field_after_failed_submit_clears_its_error() {
    let mut form = RegistrationForm::default();
    fill(&mut form, "", "jane@example.com", "");
    submit_collecting(&mut form);
    assert_eq!(form.error(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(form.error(Field::Password), Some(PASSWORD_REQUIRED));

    form.set_value(Field::Name, "Jane".to_owned());

    assert_eq!(form.error(Field::Name), None);
    assert_eq!(form.error(Field::Password), Some(PASSWORD_REQUIRED));
}

#[test]
fn editing_after_failed_submit_updates_message() {
    let mut form = RegistrationForm::default();
    submit_collecting(&mut form);

    form.set_value(Field::Password, "short".to_owned());
    assert_eq!(form.error(Field::Password), Some(PASSWORD_TOO_SHORT));

    form.set_value(Field::Name, "x".repeat(40));
    assert_eq!(form.error(Field::Name), Some(NAME_TOO_LONG));
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_clears_state_but_keeps_count() {
    let mut form = RegistrationForm::default();
    fill(&mut form, "Jane", "", "");
    submit_collecting(&mut form);

    form.reset();

    assert!(form.values().is_empty());
    assert!(form.errors().is_empty());
    assert!(!form.is_submitted());
    assert!(!form.is_submit_successful());
    assert_eq!(form.submit_count(), 1);
}
