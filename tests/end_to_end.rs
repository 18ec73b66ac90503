use std::process::Command;

use point_samples::{
  abstractions::AllocationLedger,
  api::{run_sample, LifecycleFinding, Sample}
};

fn point_samples() -> Command {
  Command::new(env!("CARGO_BIN_EXE_point-samples"))
}

#[test]
fn default_run_prints_exactly_the_sum() {
  let output = point_samples().output().expect("binary should run");

  assert!(output.status.success());
  assert_eq!(output.status.code(), Some(0));
  assert_eq!(String::from_utf8(output.stdout).unwrap(), "{.x = 5, .y = 5}\n");
}

#[test]
fn default_run_warns_about_the_missing_free_on_stderr() {
  let output = point_samples().output().expect("binary should run");
  let stderr = String::from_utf8(output.stderr).unwrap();

  assert!(stderr.contains("never releases it"), "stderr was: {}", stderr);
}

#[test]
fn each_sample_prints_its_own_format() {
  let expected = [
    ("cpp",  "{.x = 5, .y = 5}\n"),
    ("go",   "{5 5}\n"),
    ("rust", "Point { x: 5, y: 5 }\n"),
  ];

  for (name, line) in expected {
    let output = point_samples().args(["--sample", name]).output().expect("binary should run");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), line, "sample {}", name);
  }
}

#[test]
fn quiet_run_keeps_stdout_to_one_line() {
  let output = point_samples()
      .args(["--verbosity", "0", "--audit"])
      .output()
      .expect("binary should run");

  assert!(output.status.success());
  assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 1);
  let stderr = String::from_utf8(output.stderr).unwrap();
  assert!(stderr.contains("C   : the C sample allocates its second point and never releases it"));
  assert!(stderr.contains("C++ : Explicit release, no findings"));
  // stderr is a pipe here, not a terminal.
  assert!(!stderr.contains('\x1b'), "stderr was: {:?}", stderr);
}

#[test]
fn unknown_sample_is_rejected() {
  let output = point_samples().args(["--sample", "java"]).output().expect("binary should run");
  assert!(!output.status.success());
  assert!(output.stdout.is_empty());
}

#[test]
fn library_runs_balance_their_allocation() {
  let ledger = AllocationLedger::new();
  for sample in Sample::ALL {
    run_sample(sample, &mut std::io::sink(), Some(&ledger)).unwrap();
  }

  assert_eq!(ledger.allocations(), Sample::ALL.len());
  assert_eq!(ledger.releases(), Sample::ALL.len());

  let flagged: Vec<LifecycleFinding> = Sample::ALL.iter().flat_map(|s| s.audit()).collect();
  assert_eq!(flagged, vec![LifecycleFinding::UnreleasedAllocation { sample: Sample::C }]);
}
