//! Job-layer tests against a directory store in temporary folders

use indoc::indoc;
use pretty_assertions::assert_eq;
use remix_driver::{
    DirectoryStore, JobMessage, JsonLinesReporter, Outcome, RunSummary, StatusMessage, SubmissionStatus,
    Worker, WorkerConfig,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct Fixture {
    input: TempDir,
    output: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            input: tempfile::tempdir().unwrap(),
            output: tempfile::tempdir().unwrap(),
        }
    }

    fn add(&self, job: &str, artifact: &str, contents: &str) {
        let path = self.input.path().join(job).join(artifact);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn output_path(&self, job: &str, artifact: &str) -> std::path::PathBuf {
        self.output.path().join(job).join(artifact)
    }

    fn worker(&self) -> Worker<DirectoryStore, JsonLinesReporter<Vec<u8>>> {
        let config = WorkerConfig {
            input_root: self.input.path().to_path_buf(),
            output_root: self.output.path().to_path_buf(),
            ..WorkerConfig::default()
        };
        let store = DirectoryStore::new(self.input.path(), self.output.path());
        Worker::new(config, store, JsonLinesReporter::new(Vec::new()))
    }
}

fn statuses(worker: Worker<DirectoryStore, JsonLinesReporter<Vec<u8>>>) -> Vec<StatusMessage> {
    let text = String::from_utf8(worker.into_reporter().into_inner()).unwrap();
    text.lines().map(|line| serde_json::from_str(line).unwrap()).collect()
}

fn is_empty_dir(path: &Path) -> bool {
    !path.exists() || fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn successful_job_translates_and_passes_through() {
    let fixture = Fixture::new();
    fixture.add("job1", "main.c", indoc! {"
        int main(int argc, char **argv) {
            return 0;
        }
    "});
    fixture.add("job1", "lib/math.c", "int twice(int x) { return x * 2; }");
    fixture.add("job1", "README.md", "# notes\n");

    let mut worker = fixture.worker();
    let outcome = worker.process_job(&JobMessage { id: "job1".to_string() });
    assert_eq!(outcome, Outcome::Ack);

    assert_eq!(
        fs::read_to_string(fixture.output_path("job1", "main.go")).unwrap(),
        "package main\n\nimport (\n\t\"os\"\n)\n\nfunc main() {\n\targc := len(os.Args)\n\targv := os.Args\n\tos.Exit(0)\n}"
    );
    assert_eq!(
        fs::read_to_string(fixture.output_path("job1", "lib/math.go")).unwrap(),
        "package main\n\nfunc twice(x int) int {\n\treturn x * 2\n}"
    );
    assert_eq!(fs::read_to_string(fixture.output_path("job1", "README.md")).unwrap(), "# notes\n");
    assert!(!fixture.output_path("job1", "main.c").exists());

    assert_eq!(
        statuses(worker),
        vec![
            StatusMessage::new("job1", SubmissionStatus::Processing),
            StatusMessage::new("job1", SubmissionStatus::Done),
        ]
    );
}

#[test]
fn failing_artifact_fails_the_whole_job() {
    let fixture = Fixture::new();
    fixture.add("job2", "a.c", "int main() { return 0; }");
    fixture.add("job2", "b.c", "int main() { printf(1); }");
    fixture.add("job2", "notes.txt", "keep me");

    let mut worker = fixture.worker();
    let outcome = worker.process_job(&JobMessage { id: "job2".to_string() });
    assert_eq!(outcome, Outcome::Nack);

    // Nothing is written for a failed job
    assert!(is_empty_dir(&fixture.output.path().join("job2")));

    let statuses = statuses(worker);
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[1].status, SubmissionStatus::Failed);
    assert_eq!(
        statuses[1].reason,
        "Lowering error at b.c:1:14: unsupported builtin: builtin 'printf' has no Go equivalent"
    );
}

#[test]
fn missing_job_folder_fails() {
    let fixture = Fixture::new();
    let mut worker = fixture.worker();

    assert_eq!(worker.process_job(&JobMessage { id: "ghost".to_string() }), Outcome::Nack);
    let statuses = statuses(worker);
    assert_eq!(statuses[1].status, SubmissionStatus::Failed);
    assert!(statuses[1].reason.contains("ghost"));
}

#[test]
fn malformed_delivery_is_rejected_without_status() {
    let fixture = Fixture::new();
    let mut worker = fixture.worker();

    assert_eq!(worker.handle_delivery("{\"identifier\": 3}"), Outcome::Nack);
    assert!(statuses(worker).is_empty());
}

#[test]
fn run_counts_outcomes() {
    let fixture = Fixture::new();
    fixture.add("ok", "main.c", "int main() { }");
    fixture.add("bad", "main.c", "int main( { }");

    let deliveries = "{\"id\": \"ok\"}\n\n{\"id\": \"bad\"}\nnot json\n";
    let mut worker = fixture.worker();
    let summary = worker.run(deliveries.as_bytes()).unwrap();

    assert_eq!(summary, RunSummary { acked: 1, nacked: 2 });
    assert!(fixture.output_path("ok", "main.go").exists());

    let statuses = statuses(worker);
    let kinds: Vec<_> = statuses.iter().map(|s| (s.id.as_str(), s.status)).collect();
    assert_eq!(
        kinds,
        vec![
            ("ok", SubmissionStatus::Processing),
            ("ok", SubmissionStatus::Done),
            ("bad", SubmissionStatus::Processing),
            ("bad", SubmissionStatus::Failed),
        ]
    );
    assert!(statuses[3].reason.starts_with("Parse error at main.c:1:"));
}

#[test]
fn custom_extensions() {
    let fixture = Fixture::new();
    fixture.add("job3", "prog.h", "int main() { }");
    fixture.add("job3", "prog.c", "this would not parse");

    let config = WorkerConfig {
        input_root: fixture.input.path().to_path_buf(),
        output_root: fixture.output.path().to_path_buf(),
        source_extension: "h".to_string(),
        target_extension: "golang".to_string(),
        log_level: None,
    };
    let store = DirectoryStore::new(fixture.input.path(), fixture.output.path());
    let mut worker = Worker::new(config, store, JsonLinesReporter::new(Vec::new()));

    assert_eq!(worker.process_job(&JobMessage { id: "job3".to_string() }), Outcome::Ack);
    assert!(fixture.output_path("job3", "prog.golang").exists());
    assert_eq!(
        fs::read_to_string(fixture.output_path("job3", "prog.c")).unwrap(),
        "this would not parse"
    );
}
