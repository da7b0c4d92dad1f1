/// Integration tests for the application layer
mod test_utilities;

use chrono::{TimeZone, Utc};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use test_utilities::mocks::*;
use bomgraph::prelude::*;
use uuid::Uuid;

const NPM_FIXTURE: &str = "tests/fixtures/npm/testpackage";
const GRADLE_FIXTURE: &str = "tests/fixtures/gradle/testproject";
const COCOAPODS_FIXTURE: &str = "tests/fixtures/cocoapods/testapp";

fn gradle_report() -> String {
    fs::read_to_string(Path::new(GRADLE_FIXTURE).join("dependencies.txt")).unwrap()
}

fn purls(components: &[Component]) -> BTreeSet<String> {
    components
        .iter()
        .filter_map(|component| component.purl.clone())
        .collect()
}

fn find<'a>(components: &'a [Component], name: &str) -> &'a Component {
    components
        .iter()
        .find(|component| component.name == name)
        .unwrap_or_else(|| panic!("no component named {}", name))
}

#[test]
fn test_npm_fixture_purls() {
    let generator = NpmGenerator::new(FileSystemReader::new(), FileSystemWalker::new());
    let components = generator.generate_bom(Path::new(NPM_FIXTURE)).unwrap();

    let expected: BTreeSet<String> = [
        "pkg:npm/testpackage@1.0.0",
        "pkg:npm/react@17.0.1",
        "pkg:npm/loose-envify@1.4.0",
        "pkg:npm/object-assign@4.1.1",
        "pkg:npm/js-tokens@4.0.0",
    ]
    .iter()
    .map(|purl| purl.to_string())
    .collect();
    assert_eq!(components.len(), 5);
    assert_eq!(purls(&components), expected);
}

#[test]
fn test_npm_fixture_required_by_chain() {
    let generator = NpmGenerator::new(FileSystemReader::new(), FileSystemWalker::new());
    let components = generator.generate_bom(Path::new(NPM_FIXTURE)).unwrap();

    assert_eq!(find(&components, "testpackage").description, "npm project root\n");
    assert_eq!(
        find(&components, "js-tokens").description,
        "npm package\n\nRequired by:\n\tloose-envify@1.4.0\n\treact@17.0.1\n\ttestpackage@1.0.0"
    );
}

#[test]
fn test_npm_nested_install_shadows_hoisted_copy() {
    let lockfile = r#"{
  "name": "app",
  "version": "2.0.0",
  "lockfileVersion": 1,
  "dependencies": {
    "debug": {
      "version": "4.3.1",
      "requires": { "ms": "2.1.2" }
    },
    "ms": { "version": "2.1.3" },
    "send": {
      "version": "0.17.1",
      "requires": { "ms": "2.1.1" },
      "dependencies": {
        "ms": { "version": "2.1.1" }
      }
    }
  }
}"#;
    let manifest = r#"{ "dependencies": { "debug": "^4.3.1", "send": "^0.17.1" } }"#;
    let reader = MockManifestReader::new()
        .with_file("app/package-lock.json", lockfile)
        .with_file("app/package.json", manifest);
    let generator = NpmGenerator::new(reader, MockDirectoryWalker::default());

    let components = generator.generate_bom(Path::new("app")).unwrap();
    let found = purls(&components);

    assert!(found.contains("pkg:npm/ms@2.1.3"));
    assert!(found.contains("pkg:npm/ms@2.1.1"));
    let nested = components
        .iter()
        .find(|component| component.purl.as_deref() == Some("pkg:npm/ms@2.1.1"))
        .unwrap();
    assert_eq!(
        nested.description,
        "npm package\n\nRequired by:\n\tsend@0.17.1\n\tapp@2.0.0"
    );
}

#[test]
fn test_npm_dev_dependencies_follow_options() {
    let lockfile = r#"{
  "name": "app",
  "version": "1.0.0",
  "lockfileVersion": 1,
  "dependencies": {
    "left-pad": { "version": "1.3.0" },
    "mocha": { "version": "8.2.1", "dev": true }
  }
}"#;
    let manifest = r#"{
  "dependencies": { "left-pad": "^1.3.0" },
  "devDependencies": { "mocha": "^8.2.1" }
}"#;
    let reader = || {
        MockManifestReader::new()
            .with_file("app/package-lock.json", lockfile)
            .with_file("app/package.json", manifest)
    };

    let generator = NpmGenerator::new(reader(), MockDirectoryWalker::default());
    let without = generator.generate_bom(Path::new("app")).unwrap();
    assert!(without.iter().all(|component| component.name != "mocha"));

    let mut generator = NpmGenerator::new(reader(), MockDirectoryWalker::default());
    generator
        .configure(GeneratorOptions {
            include_tests: true,
            ..GeneratorOptions::default()
        })
        .unwrap();
    let with_tests = generator.generate_bom(Path::new("app")).unwrap();
    assert!(with_tests.iter().any(|component| component.name == "mocha"));
}

#[test]
fn test_npm_read_failure_is_reported() {
    let generator = NpmGenerator::new(
        MockManifestReader::with_failure(),
        MockDirectoryWalker::default(),
    );
    assert!(generator.generate_bom(Path::new("app")).is_err());
}

#[test]
fn test_gradle_fixture_components() {
    let source = MockDependencyReportSource::new(&gradle_report());
    let generator = GradleGenerator::new(FileSystemReader::new(), source, FileSystemWalker::new());

    let components = generator.generate_bom(Path::new(GRADLE_FIXTURE)).unwrap();
    let names: BTreeSet<&str> = components.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(components.len(), 7);
    assert_eq!(
        names,
        [
            "compileClasspath",
            "runtimeClasspath",
            "testCompileClasspath",
            "testRuntimeClasspath",
            "joda-time",
            "junit",
            "hamcrest-core",
        ]
        .into_iter()
        .collect()
    );
    for configuration in ["compileClasspath", "testRuntimeClasspath"] {
        assert!(find(&components, configuration).purl.is_none());
    }
    assert_eq!(
        find(&components, "joda-time").purl.as_deref(),
        Some("pkg:maven/joda-time/joda-time@2.2")
    );
    assert_eq!(
        find(&components, "junit").purl.as_deref(),
        Some("pkg:maven/junit/junit@4.12")
    );
    assert_eq!(
        find(&components, "hamcrest-core").purl.as_deref(),
        Some("pkg:maven/org.hamcrest/hamcrest-core@1.3")
    );
}

#[test]
fn test_gradle_dependency_merged_across_configurations() {
    let source = MockDependencyReportSource::new(&gradle_report());
    let generator = GradleGenerator::new(FileSystemReader::new(), source, FileSystemWalker::new());

    let components = generator.generate_bom(Path::new(GRADLE_FIXTURE)).unwrap();
    let joda = find(&components, "joda-time");

    assert_eq!(joda.group, "joda-time");
    assert!(joda.description.starts_with(
        "Gradle dependency\n\nAppears in: compileClasspath, runtimeClasspath, testCompileClasspath, testRuntimeClasspath\n"
    ));
    assert_eq!(
        find(&components, "testRuntimeClasspath").description,
        "Gradle build configuration\n"
    );
}

#[test]
fn test_gradle_project_without_build_script_runs_nothing() {
    let source = MockDependencyReportSource::new(&gradle_report());
    let generator = GradleGenerator::new(
        FileSystemReader::new(),
        source.clone(),
        FileSystemWalker::new(),
    );

    let components = generator.generate_bom(Path::new(NPM_FIXTURE)).unwrap();
    assert!(components.is_empty());
    assert!(source.requested_paths().is_empty());
}

#[test]
fn test_cocoapods_fixture_components() {
    let generator = CocoapodsGenerator::new(FileSystemReader::new(), FileSystemWalker::new());
    let components = generator.generate_bom(Path::new(COCOAPODS_FIXTURE)).unwrap();

    assert_eq!(components.len(), 10);
    let found = purls(&components);
    for purl in [
        "pkg:generic/tests/fixtures/cocoapods/testapp@unknown",
        "pkg:cocoapods/AFNetworking@2.7.0",
        "pkg:cocoapods/AFNetworking/NSURLConnection@2.7.0",
        "pkg:cocoapods/AFNetworking/NSURLSession@2.7.0",
        "pkg:cocoapods/AFNetworking/Reachability@2.7.0",
        "pkg:cocoapods/AFNetworking/Security@2.7.0",
        "pkg:cocoapods/AFNetworking/Serialization@2.7.0",
        "pkg:cocoapods/AFNetworking/UIKit@2.7.0",
        "pkg:cocoapods/ORStackView@3.0.1",
        "pkg:cocoapods/FLKAutoLayout@0.2.1",
    ] {
        assert!(found.contains(purl), "missing {}", purl);
    }
    assert_eq!(
        find(&components, "FLKAutoLayout").description,
        "CocoaPods package\n\nRequired by:\n\tORStackView@3.0.1\n\ttests/fixtures/cocoapods/testapp@unknown"
    );
}

#[test]
fn test_cocoapods_subspecs_nest_under_their_pod() {
    let mut generator = CocoapodsGenerator::new(FileSystemReader::new(), FileSystemWalker::new());
    generator
        .configure(GeneratorOptions {
            include_subcomponents: true,
            ..GeneratorOptions::default()
        })
        .unwrap();

    let components = generator.generate_bom(Path::new(COCOAPODS_FIXTURE)).unwrap();
    let afnetworking = find(&components, "AFNetworking");

    assert_eq!(components.len(), 4);
    assert_eq!(afnetworking.components.len(), 6);
    assert_eq!(components.iter().map(Component::tree_size).sum::<usize>(), 10);
}

#[test]
fn test_recursive_scan_finds_every_fixture_project() {
    let mut generator = NpmGenerator::new(FileSystemReader::new(), FileSystemWalker::new());
    generator
        .configure(GeneratorOptions {
            recurse: true,
            ..GeneratorOptions::default()
        })
        .unwrap();

    let components = generator.generate_bom(Path::new("tests/fixtures")).unwrap();
    assert_eq!(components.len(), 5);
}

#[test]
fn test_use_case_runs_all_generators() {
    let reporter = MockProgressReporter::new();
    let generators: Vec<Box<dyn BomGenerator>> = vec![
        Box::new(NpmGenerator::new(FileSystemReader::new(), FileSystemWalker::new())),
        Box::new(CocoapodsGenerator::new(FileSystemReader::new(), FileSystemWalker::new())),
    ];
    let mut use_case = GenerateBomUseCase::new(generators, reporter.clone());

    let request = BomRequest::new(
        PathBuf::from(NPM_FIXTURE),
        vec!["npm".to_string(), "cocoapods".to_string()],
        GeneratorOptions::default(),
    );
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.components.len(), 5);
    assert_eq!(response.failures.len(), 1);
    assert_eq!(response.failures[0].generator, "cocoapods");
    assert_eq!(reporter.started_generators(), ["npm", "cocoapods"]);
    assert!(reporter.events().contains(&ProgressEvent::Step {
        current: 2,
        total: 2,
        generator: Some("cocoapods".to_string()),
    }));
    let failures = reporter.failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("cocoapods generator failed"));
    assert!(matches!(
        reporter.events().last(),
        Some(ProgressEvent::Completed(_))
    ));
}

#[test]
fn test_use_case_gradle_failure_does_not_stop_npm() {
    let reporter = MockProgressReporter::new();
    let generators: Vec<Box<dyn BomGenerator>> = vec![
        Box::new(GradleGenerator::new(
            MockManifestReader::new().with_file("app/build.gradle", ""),
            MockDependencyReportSource::with_failure(),
            MockDirectoryWalker::default(),
        )),
        Box::new(NpmGenerator::new(
            MockManifestReader::new().with_file(
                "app/package-lock.json",
                r#"{ "name": "app", "version": "1.0.0", "dependencies": {} }"#,
            ),
            MockDirectoryWalker::default(),
        )),
    ];
    let mut use_case = GenerateBomUseCase::new(generators, reporter);

    let request = BomRequest::new(
        PathBuf::from("app"),
        vec!["gradle".to_string(), "npm".to_string()],
        GeneratorOptions::default(),
    );
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.components.len(), 1);
    assert_eq!(response.failures.len(), 1);
    assert!(response.failures[0].message.contains("Mock gradle failure"));
}

#[test]
fn test_generation_is_deterministic() {
    let run = || {
        let mut use_case = GenerateBomUseCase::new(
            vec![
                Box::new(NpmGenerator::new(FileSystemReader::new(), FileSystemWalker::new()))
                    as Box<dyn BomGenerator>,
                Box::new(GradleGenerator::new(
                    FileSystemReader::new(),
                    MockDependencyReportSource::new(&gradle_report()),
                    FileSystemWalker::new(),
                )),
                Box::new(CocoapodsGenerator::new(
                    FileSystemReader::new(),
                    FileSystemWalker::new(),
                )),
            ],
            MockProgressReporter::new(),
        );
        let request = BomRequest::new(
            PathBuf::from("tests/fixtures"),
            vec!["npm".to_string(), "gradle".to_string(), "cocoapods".to_string()],
            GeneratorOptions {
                recurse: true,
                ..GeneratorOptions::default()
            },
        );
        use_case.execute(request).unwrap().components
    };

    let first = run();
    let second = run();
    assert_eq!(first.len(), 22);
    assert_eq!(first, second);
}

#[test]
fn test_cyclonedx_document_lists_components() {
    let generator = NpmGenerator::new(FileSystemReader::new(), FileSystemWalker::new());
    let components = generator.generate_bom(Path::new(NPM_FIXTURE)).unwrap();
    let metadata = BomMetadata::new(
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        "bomgraph",
        "0.1.0",
        Uuid::nil(),
    );

    let output = CycloneDxFormatter::new().format(&components, &metadata).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["bomFormat"], "CycloneDX");
    assert_eq!(json["components"].as_array().unwrap().len(), 5);
    assert_eq!(json["components"][0]["purl"], "pkg:npm/testpackage@1.0.0");
}
