//! Aggregation and workflow reporting end to end: validation problems from
//! every source land in one report, and the report flows through the
//! runner's file commands.

use serde_json::json;
use tempfile::TempDir;

use patch_init::actions;
use patch_init::context;
use patch_init::guidance;
use patch_init::params;
use patch_init::report::{Fault, Report};

fn valid_blob() -> serde_json::Value {
    let off = json!({
        "Gothic 1": "false",
        "Gothic Sequel": "false",
        "Gothic 2 Classic": "false",
        "Gothic 2 NotR": "false",
    });
    json!({
        "Content scripts": {
            "Gothic 1": "true",
            "Gothic Sequel": "false",
            "Gothic 2 Classic": "false",
            "Gothic 2 NotR": "true",
        },
        "Ikarus and LeGo": { "Ikarus": "false", "LeGo": "false" },
        "Content initialization": { "Content initialization function": "false" },
        "Menu initialization": { "Menu initialization function": "false" },
        "Menu scripts": off,
        "Particle FX scripts": off,
        "Visual FX scripts": off,
        "Sound FX scripts": off,
        "Music scripts": off,
        "Camera scripts": off,
        "Fight AI scripts": off,
        "Output units": off,
        "Animations": off,
    })
}

#[test]
fn test_problems_aggregate_across_sources() {
    let mut report = Report::new();

    // Name and description problems do not stop parameter validation
    context::check_patch_name("1Bad-Name", &mut report);
    context::check_patch_description("this > that", &mut report);

    let mut blob = valid_blob();
    blob["Menu initialization"] = json!({ "Menu initialization function": true });
    blob["Content scripts"] = json!({
        "Gothic 1": "false",
        "Gothic Sequel": "false",
        "Gothic 2 Classic": "false",
        "Gothic 2 NotR": "false",
    });
    let config = params::parse_parameters(&blob.to_string(), &mut report)
        .expect("Not a hard fault");

    assert!(config.is_none());
    // digit + illegal character + description character + init rule
    assert_eq!(report.errors.len(), 4);
    let rendered = report.render_errors();
    assert_eq!(rendered.matches("<table>").count(), 4);
    assert!(rendered.contains("<h3>The patch name may not start with a digit</h3>"));
    assert!(rendered.contains("<h3>Invalid input Menu initialization</h3>"));
}

#[test]
fn test_successful_run_summary() {
    let mut report = Report::new();
    let mut blob = valid_blob();
    blob["Ikarus and LeGo"] = json!({ "Ikarus": "false", "LeGo": "true" });

    let config = params::parse_parameters(&blob.to_string(), &mut report)
        .expect("Not a hard fault")
        .expect("Valid selections");
    assert!(config.ikarus && config.lego);

    let patch_context = context::PatchContext {
        name: "MyPatch".to_string(),
        description: String::new(),
        url: "https://github.com/user/MyPatch".to_string(),
        repo: "user/MyPatch".to_string(),
        topics: Vec::new(),
        username: "user".to_string(),
        username_full: "User".to_string(),
        user_email: "1+user@users.noreply.github.com".to_string(),
    };
    guidance::list_next_steps(&config, &patch_context, &mut report);

    let warnings = report.render_warnings();
    assert!(warnings.starts_with("> [!WARNING]"));
    assert!(warnings.contains("LeGo is enabled without Ikarus"));

    let infos = report.render_infos("MyPatch");
    assert!(infos.contains("\u{1F389} MyPatch \u{1F389}"));
    assert!(infos.contains("<h3>:one: Add Scripts</h3>"));
    assert!(infos.contains("Test the Patch"));
    // Gothic 1 and Gothic 2 NotR are selected, so the Steam hint shows up
    assert!(infos.contains("Steam Workshop"));
    // Suggested topics rendered as keyboard keys
    assert!(infos.contains("<kbd>gothic</kbd>"));
    assert!(infos.contains("<kbd>daedalus</kbd>"));
}

#[test]
fn test_failed_run_suppresses_infos() {
    let mut report = Report::new();
    report.info("Add Scripts", "details");
    report.absorb_failure(Fault::new("Repository must not be a fork", "Create a new repository.").into());

    assert!(report.has_errors());
    assert!(report.render_infos("MyPatch").is_empty());
    let rendered = report.render_errors();
    assert!(rendered.contains("<h3>Repository must not be a fork</h3>"));
    assert!(rendered.contains("<i>Create a new repository.</i>"));
}

#[test]
fn test_outputs_and_summary_file_commands() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("github_output");
    let summary_path = temp_dir.path().join("step_summary");
    std::env::set_var("GITHUB_OUTPUT", &output_path);
    std::env::set_var("GITHUB_STEP_SUMMARY", &summary_path);

    actions::set_output("errors", "line one\nline two").expect("Output should write");
    actions::set_output("duration", "###### Duration: 1.2 seconds").expect("Output should write");
    // A value containing the delimiter forces a longer one
    actions::set_output("infos", "mentions ghadelimiter inline").expect("Output should write");
    actions::add_summary("> [!WARNING]\n> ### Heads up").expect("Summary should write");

    std::env::remove_var("GITHUB_OUTPUT");
    std::env::remove_var("GITHUB_STEP_SUMMARY");

    let output = std::fs::read_to_string(&output_path).expect("Output file exists");
    assert!(output.contains("errors<<ghadelimiter\nline one\nline two\nghadelimiter\n"));
    assert!(output.contains("duration<<ghadelimiter\n###### Duration: 1.2 seconds\nghadelimiter\n"));
    assert!(output.contains("infos<<ghadelimiter_\nmentions ghadelimiter inline\nghadelimiter_\n"));

    let summary = std::fs::read_to_string(&summary_path).expect("Summary file exists");
    assert!(summary.contains("> ### Heads up"));
}

#[test]
fn test_resolve_parameters_precedence() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("selections.json");
    std::fs::write(&file, "{\"from\": \"file\"}").unwrap();

    // Inline beats the file
    let blob = actions::resolve_parameters(Some("{\"from\": \"inline\"}"), Some(&file))
        .expect("Inline blob resolves");
    assert_eq!(blob, "{\"from\": \"inline\"}");

    let blob = actions::resolve_parameters(None, Some(&file)).expect("File blob resolves");
    assert_eq!(blob, "{\"from\": \"file\"}");
}

#[test]
fn test_resolve_parameters_missing_is_a_fault() {
    let error = actions::resolve_parameters(None, None).unwrap_err();
    let fault = error.downcast::<Fault>().expect("Missing input is a Fault");
    assert_eq!(fault.summary, "Missing input parameters");
}
