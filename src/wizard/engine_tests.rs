use super::{CompletionHandler, NextOutcome, StepDescriptor, WizardEngine};
use crate::document::{Document, Fragment};
use crate::wizard::validators::require_fields;
use serde_json::{json, Value};

#[derive(Default)]
struct Recorder {
    calls: Vec<Document>,
}

impl CompletionHandler for Recorder {
    fn on_complete(&mut self, document: &Document) {
        self.calls.push(document.clone());
    }
}

fn require_name(document: &Document) -> Vec<String> {
    require_fields(document, &["name"])
}

fn always_fails(_: &Document) -> Vec<String> {
    vec!["first".to_string(), "second".to_string()]
}

fn step(id: &'static str, validator: Option<fn(&Document) -> Vec<String>>) -> StepDescriptor<()> {
    StepDescriptor {
        id,
        title: id,
        description: "",
        renderer: (),
        validator,
    }
}

fn fragment(value: Value) -> Fragment {
    value.as_object().cloned().expect("object literal")
}

fn two_step() -> WizardEngine<(), Recorder> {
    WizardEngine::new(
        vec![step("identity", Some(require_name)), step("confirm", None)],
        Document::new(),
        Recorder::default(),
    )
    .expect("engine")
}

fn three_step() -> WizardEngine<(), Recorder> {
    WizardEngine::new(
        vec![step("a", None), step("b", None), step("c", None)],
        Document::new(),
        Recorder::default(),
    )
    .expect("engine")
}

#[test]
fn rejects_empty_step_list() {
    let result = WizardEngine::new(Vec::<StepDescriptor<()>>::new(), Document::new(), Recorder::default());
    assert!(result.is_err());
}

#[test]
fn next_blocks_when_required_field_missing() {
    let mut engine = two_step();
    engine.update_fragment(Fragment::new());

    assert_eq!(engine.next(), NextOutcome::Blocked);
    assert_eq!(engine.errors(), ["name is required".to_string()]);
    assert_eq!(engine.current(), 0);
    assert!(engine.completed_steps().is_empty());
}

#[test]
fn next_advances_once_field_is_present() {
    let mut engine = two_step();
    engine.next();
    engine.update_fragment(fragment(json!({"name": "Acme"})));

    assert_eq!(engine.next(), NextOutcome::Advanced(1));
    assert_eq!(engine.current(), 1);
    assert_eq!(engine.completed_steps().iter().copied().collect::<Vec<_>>(), vec![0]);
    assert!(engine.errors().is_empty());
}

#[test]
fn last_step_invokes_completion_handler_with_full_document() {
    let mut engine = two_step();
    engine.update_fragment(fragment(json!({"name": "Acme"})));
    engine.next();

    assert_eq!(engine.next(), NextOutcome::Completed);
    assert!(engine.is_finished());
    assert_eq!(engine.handler().calls.len(), 1);
    assert_eq!(
        Value::Object(engine.handler().calls[0].clone()),
        json!({"name": "Acme"})
    );
}

#[test]
fn repeated_next_on_last_step_reinvokes_handler() {
    let mut engine = two_step();
    engine.update_fragment(fragment(json!({"name": "Acme"})));
    engine.next();
    engine.next();
    engine.next();
    assert_eq!(engine.handler().calls.len(), 2);
    assert_eq!(engine.current(), 1);
}

#[test]
fn cannot_skip_past_uncompleted_step() {
    let mut engine = three_step();
    assert_eq!(engine.next(), NextOutcome::Advanced(1));
    engine.previous();
    assert_eq!(engine.current(), 0);

    assert!(!engine.go_to_step(2));
    assert_eq!(engine.current(), 0);

    assert!(engine.go_to_step(1));
    assert_eq!(engine.current(), 1);
}

#[test]
fn out_of_range_targets_are_ignored() {
    let mut engine = three_step();
    assert!(!engine.go_to_step(99));
    assert!(!engine.go_to_step(usize::MAX));
    assert!(!engine.previous());
    assert_eq!(engine.current(), 0);
}

#[test]
fn reached_steps_stay_reachable_without_revalidation() {
    let mut engine = three_step();
    engine.next();
    engine.next();
    assert_eq!(engine.current(), 2);

    assert!(engine.go_to_step(0));
    assert!(engine.go_to_step(2));
    assert_eq!(engine.current(), 2);
}

#[test]
fn successful_navigation_clears_errors() {
    let mut engine = WizardEngine::new(
        vec![step("a", None), step("b", Some(always_fails)), step("c", None)],
        Document::new(),
        Recorder::default(),
    )
    .expect("engine");
    engine.next();
    assert_eq!(engine.next(), NextOutcome::Blocked);
    assert_eq!(engine.errors().len(), 2);

    assert!(engine.previous());
    assert!(engine.errors().is_empty());

    assert!(engine.go_to_step(1));
    engine.next();
    assert_eq!(engine.errors(), ["first".to_string(), "second".to_string()]);
    assert!(engine.go_to_step(1));
    assert!(engine.errors().is_empty());
}

#[test]
fn rejected_navigation_keeps_errors() {
    let mut engine = WizardEngine::new(
        vec![step("a", Some(always_fails)), step("b", None), step("c", None)],
        Document::new(),
        Recorder::default(),
    )
    .expect("engine");
    engine.next();
    assert!(!engine.go_to_step(2));
    assert_eq!(engine.errors().len(), 2);
}

#[test]
fn passing_steps_complete_monotonically() {
    let mut engine = three_step();
    let mut last_index = engine.current();
    let mut last_completed = engine.completed_steps().len();
    while let NextOutcome::Advanced(index) = engine.next() {
        assert!(index > last_index);
        assert!(engine.completed_steps().len() >= last_completed);
        last_index = index;
        last_completed = engine.completed_steps().len();
    }
    assert_eq!(engine.completed_steps().len(), 3);
    assert!(engine.is_finished());
}

#[test]
fn empty_fragment_after_write_preserves_value() {
    let mut engine = three_step();
    engine.update_fragment(fragment(json!({"k": "v"})));
    engine.update_fragment(Fragment::new());
    assert_eq!(engine.document().get("k"), Some(&json!("v")));
}

#[test]
fn fragments_apply_in_call_order() {
    let mut engine = three_step();
    engine.update_fragment(fragment(json!({"k": 1, "other": true})));
    engine.update_fragment(fragment(json!({"k": 2})));
    assert_eq!(
        Value::Object(engine.document().clone()),
        json!({"k": 2, "other": true})
    );
}

#[test]
fn closures_work_as_completion_handlers() {
    let mut seen = 0usize;
    {
        let mut engine = WizardEngine::new(
            vec![step("only", None)],
            Document::new(),
            |_: &Document| seen += 1,
        )
        .expect("engine");
        assert_eq!(engine.next(), NextOutcome::Completed);
    }
    assert_eq!(seen, 1);
}
