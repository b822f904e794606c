//! E2E Scenario: publishing and inspecting a registry
//!
//! `motion build` generates manifests from a component tree; the generated
//! files are then served by a mock registry and consumed by `view` and `add`.

use httpmock::prelude::*;
use serde_json::Value;

use super::fixture::E2EFixture;

const GLOW_INPUT: &str = "import { motion } from \"motion/react\";\nimport { cn } from \"../lib/utils\";\nimport { AnimatedButton } from \"./animated-button\";\n\nexport function AiGlowInput() {\n  return <AnimatedButton className={cn(\"glow\")} />;\n}\n";
const BUTTON: &str = "import { motion } from \"motion/react\";\n\nexport function AnimatedButton() {\n  return <motion.button />;\n}\n";
const UTILS: &str = "import { clsx } from \"clsx\";\n\nexport const cn = (...inputs) => clsx(inputs);\n";

fn setup_source(fixture: &E2EFixture) {
    fixture.create_file("registry-src/components/ui/ai-glow-input.tsx", GLOW_INPUT);
    fixture.create_file("registry-src/components/ui/animated-button.tsx", BUTTON);
    fixture.create_file("registry-src/components/lib/utils.ts", UTILS);
}

#[test]
fn test_build_writes_manifests_and_index() {
    let fixture = E2EFixture::new("build_manifests");
    setup_source(&fixture);

    let output = fixture.run_motion(&[
        "build",
        "--source",
        "registry-src/components",
        "--out",
        "public/r",
    ]);
    fixture.assert_success(&output, "build");
    assert!(output.stdout.contains("built 3 component(s)"));

    let manifest: Value = serde_json::from_str(&fixture.read("public/r/ai-glow-input.json")).unwrap();
    assert_eq!(manifest["name"], "ai-glow-input");
    assert_eq!(manifest["type"], "registry:ui");
    assert_eq!(manifest["files"][0]["path"], "components/ui/ai-glow-input.tsx");
    assert_eq!(manifest["files"][0]["content"], GLOW_INPUT);
    assert_eq!(manifest["dependencies"], serde_json::json!(["motion"]));
    assert_eq!(
        manifest["registryDependencies"],
        serde_json::json!(["animated-button", "utils"])
    );

    let index: Value = serde_json::from_str(&fixture.read("public/r/index.json")).unwrap();
    let names = index
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["ai-glow-input", "animated-button", "utils"]);
}

#[test]
fn test_build_missing_source_fails() {
    let fixture = E2EFixture::new("build_missing_source");
    let output = fixture.run_motion(&["build", "--source", "nowhere"]);
    fixture.assert_exit(&output, 1, "build nowhere");
    assert!(output.stderr.contains("does not exist"));
}

#[test]
fn test_built_manifest_installs_with_add() {
    let fixture = E2EFixture::new("build_then_add");
    setup_source(&fixture);
    let output = fixture.run_motion(&[
        "build",
        "--source",
        "registry-src/components",
        "--out",
        "public/r",
    ]);
    fixture.assert_success(&output, "build");

    let server = MockServer::start();
    let body = fixture.read("public/r/ai-glow-input.json");
    let mock = server.mock(|when, then| {
        when.method(GET).path("/r/ai-glow-input.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let consumer = E2EFixture::new("build_then_add_consumer");
    consumer.create_dir("src/components");
    consumer.create_file("bun.lockb", "");
    let output = consumer.run_motion(&["add", "ai-glow-input", "--registry", &server.base_url()]);
    consumer.assert_success(&output, "add ai-glow-input");
    mock.assert();

    assert_eq!(consumer.read("src/components/ui/ai-glow-input.tsx"), GLOW_INPUT);
    assert!(output.stdout.contains("motion add animated-button"));
    assert!(output.stdout.contains("motion add utils"));
    assert!(output.stdout.contains("bun add motion"));
}

#[test]
fn test_view_shows_manifest_without_writing() {
    let fixture = E2EFixture::new("view_manifest");
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/r/animated-button.json");
        then.status(200).json_body(serde_json::json!({
            "name": "animated-button",
            "description": "A button with spring hover",
            "files": [{
                "path": "components/motion-core/animated-button.tsx",
                "content": BUTTON,
                "type": "registry:ui"
            }],
            "dependencies": ["motion"]
        }));
    });

    let output = fixture.run_motion(&["view", "animated-button", "--registry", &server.base_url()]);
    fixture.assert_success(&output, "view");
    assert!(output.stdout.contains("A button with spring hover"));
    assert!(output.stdout.contains("components/motion-core/animated-button.tsx"));
    assert!(!fixture.exists("components"));

    let output = fixture.run_motion(&[
        "--robot",
        "view",
        "animated-button",
        "--registry",
        &server.base_url(),
    ]);
    fixture.assert_success(&output, "robot view");
    let json = output.json();
    assert_eq!(json["data"]["files"][0]["bytes"], BUTTON.len());
    assert_eq!(json["data"]["dependencies"][0], "motion");
}
