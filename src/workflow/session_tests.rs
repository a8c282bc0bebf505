use super::*;
use crate::declaration::{initial_document, sample_document};
use crate::draft::MemoryDraftStore;
use serde_json::json;

struct Run {
    end: SessionEnd,
    transcript: String,
    current: usize,
    completed: Vec<usize>,
}

fn run_lines(store: &mut MemoryDraftStore, fallback: Document, output: PathBuf, lines: &str) -> Run {
    let mut session = Session::start(store, "t".to_string(), fallback, output).expect("start session");
    let mut out = Vec::new();
    let end = session.run(lines.as_bytes(), &mut out).expect("run session");
    Run {
        end,
        transcript: String::from_utf8(out).expect("utf8 transcript"),
        current: session.engine().current(),
        completed: session.engine().completed_steps().iter().copied().collect(),
    }
}

#[test]
fn sample_document_completes_and_writes_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("out").join("t.json");
    let mut store = MemoryDraftStore::new();
    let run = run_lines(
        &mut store,
        sample_document(),
        output.clone(),
        "next\nnext\nnext\nnext\nnext\n",
    );
    assert_eq!(run.end, SessionEnd::Completed);
    assert!(run.transcript.contains("Step 5/5: Review & Generate"));
    assert!(run.transcript.contains(&format!("wrote {}", output.display())));
    let written: Value =
        serde_json::from_slice(&std::fs::read(&output).expect("read output")).expect("parse output");
    assert_eq!(written["nomorAju"], json!("301017INA9G220220525000025"));
    assert_eq!(written["barang"][0]["uraian"], json!("SAMPLE GOODS"));
    assert_eq!(written["kontainer"], json!([]));
}

#[test]
fn blank_main_data_blocks_next() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = MemoryDraftStore::new();
    let run = run_lines(&mut store, initial_document(), dir.path().join("o.json"), "next\nquit\n");
    assert_eq!(run.end, SessionEnd::Quit);
    assert_eq!(run.current, 0);
    assert!(run.completed.is_empty());
    assert!(run.transcript.contains("cannot continue:"));
    assert!(run.transcript.contains("  - cif is required"));
    assert!(run.transcript.contains("draft kept for form t"));
}

#[test]
fn accepted_fragments_are_autosaved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = MemoryDraftStore::new();
    run_lines(
        &mut store,
        initial_document(),
        dir.path().join("o.json"),
        "set cif=10.5 namaTtd=\"BUDI S\"\n",
    );
    let saved = store.load("t", Document::new());
    assert_eq!(saved.get("cif"), Some(&json!(10.5)));
    assert_eq!(saved.get("namaTtd"), Some(&json!("BUDI S")));
    assert_eq!(saved.get("asalData"), Some(&json!("S")));
}

#[test]
fn rejected_input_is_not_saved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = MemoryDraftStore::new();
    let run = run_lines(&mut store, initial_document(), dir.path().join("o.json"), "set cif=abc\n");
    assert!(run.transcript.contains("error: cif expects a number"));
    assert!(store.load("t", Document::new()).is_empty());
}

#[test]
fn barang_step_requires_an_item() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = MemoryDraftStore::new();
    let run = run_lines(
        &mut store,
        sample_document(),
        dir.path().join("o.json"),
        "next\nremove barang 1\nnext\n\
         add barang uraian=A merk=B tipe=C cif=1 bruto=1 netto=1 jumlahSatuan=2\nnext\n",
    );
    assert!(run.transcript.contains("  - At least one barang item is required"));
    assert_eq!(run.current, 2);
    assert_eq!(run.completed, vec![0, 1]);
    let saved = store.load("t", Document::new());
    assert_eq!(saved["barang"][0]["seriBarang"], json!(1));
    assert_eq!(saved["barang"][0]["jumlahSatuan"], json!(2));
}

#[test]
fn goto_honors_reachability() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = MemoryDraftStore::new();
    let run = run_lines(
        &mut store,
        sample_document(),
        dir.path().join("o.json"),
        "goto 3\ngoto 0\nnext\ngoto 1\ngoto 2\n",
    );
    assert!(run.transcript.contains("step 3 is not reachable yet"));
    assert!(run.transcript.contains("step 0 is not reachable yet"));
    assert_eq!(run.current, 1);
}

#[test]
fn prev_at_first_step_is_a_no_op() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = MemoryDraftStore::new();
    let run = run_lines(&mut store, sample_document(), dir.path().join("o.json"), "prev\n");
    assert!(run.transcript.contains("already at the first step"));
    assert_eq!(run.current, 0);
}

#[test]
fn end_of_input_keeps_session_open_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = MemoryDraftStore::new();
    let run = run_lines(&mut store, sample_document(), dir.path().join("o.json"), "next\n");
    assert_eq!(run.end, SessionEnd::Quit);
    assert_eq!(run.current, 1);
}

#[test]
fn failed_write_leaves_session_running() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"x").expect("write blocker");
    let mut store = MemoryDraftStore::new();
    let run = run_lines(
        &mut store,
        sample_document(),
        blocker.join("out.json"),
        "goto 1\nnext\nnext\nnext\nnext\nnext\n",
    );
    assert_eq!(run.end, SessionEnd::Quit);
    assert_eq!(run.current, 4);
    assert!(run.transcript.contains("error: create"));
}

#[test]
fn restored_draft_wins_over_fallback() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = MemoryDraftStore::new();
    store.save("t", &sample_document());
    let run = run_lines(&mut store, initial_document(), dir.path().join("o.json"), "next\n");
    assert_eq!(run.current, 1);
}

#[test]
fn status_marks_steps() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = MemoryDraftStore::new();
    let run = run_lines(&mut store, sample_document(), dir.path().join("o.json"), "next\nstatus\n");
    assert!(run.transcript.contains("  1. Main Data            done"));
    assert!(run.transcript.contains("> 2. Barang               open"));
    assert!(run.transcript.contains("  3. Entitas              locked"));
}

#[test]
fn parses_commands() {
    assert_eq!(parse_command("   \n").expect("blank"), None);
    assert_eq!(parse_command("next").expect("next"), Some(SessionCommand::Next));
    assert_eq!(parse_command("goto 2").expect("goto"), Some(SessionCommand::Goto(2)));
    assert_eq!(
        parse_command("remove kemasan 3").expect("remove"),
        Some(SessionCommand::Input(StepInput::Remove {
            collection: Collection::Kemasan,
            position: 3,
        }))
    );
    assert_eq!(
        parse_command("set uraian='A B'").expect("set"),
        Some(SessionCommand::Input(StepInput::Set(vec![(
            "uraian".to_string(),
            "A B".to_string()
        )])))
    );
}

#[test]
fn rejects_malformed_commands() {
    assert!(parse_command("jump").is_err());
    assert!(parse_command("add").is_err());
    assert!(parse_command("add cargo x=1").is_err());
    assert!(parse_command("remove barang").is_err());
    assert!(parse_command("goto -1").is_err());
    assert!(parse_command("set").is_err());
    assert!(parse_command("set \"unterminated").is_err());
}

#[test]
fn nested_item_fields_cannot_break_generation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("o.json");
    let mut store = MemoryDraftStore::new();
    let run = run_lines(
        &mut store,
        sample_document(),
        output.clone(),
        "next\nedit barang 1 barangTarif=x\nnext\nnext\nnext\nnext\n",
    );
    assert!(run.transcript.contains("error: barangTarif is a list"));
    assert_eq!(run.end, SessionEnd::Completed);
    assert!(output.exists());
    let written: Value =
        serde_json::from_slice(&std::fs::read(&output).expect("read output")).expect("parse output");
    assert_eq!(written["barang"][0]["barangTarif"], json!([]));
}
