use std::fs;

use rake_outline::{outline_file, outline_source, SymbolKind};

/// The classic Rakefile shape: nested namespaces with one of every
/// declaration keyword and all accepted name shapes.
const FIXTURE: &str = r#"namespace :foo do
  namespace :bar do
    task :one
    task two: []
    task "three"
    task "four" => []
    file :five
    directory :six
    multitask :seven
  end
end
"#;

#[test]
fn test_fixture_outline_structure() {
    let symbols = outline_source(FIXTURE).unwrap();

    assert_eq!(symbols.len(), 1);
    let foo = &symbols[0];
    assert_eq!(foo.name, "foo");
    assert_eq!(foo.kind, SymbolKind::Namespace);

    assert_eq!(foo.children.len(), 1);
    let bar = &foo.children[0];
    assert_eq!(bar.name, "bar");
    assert_eq!(bar.kind, SymbolKind::Namespace);

    let tasks = &bar.children;
    assert_eq!(tasks.len(), 7);
    let names: Vec<_> = tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        ["one", "two", "three", "four", "five", "six", "seven"]
    );
    assert!(tasks.iter().all(|t| t.kind == SymbolKind::Task));
    assert!(tasks.iter().all(|t| t.children.is_empty()));
}

#[test]
fn test_outline_is_idempotent() {
    let first = outline_source(FIXTURE).unwrap();
    let second = outline_source(FIXTURE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_gate_accepts_rakefile_and_rake_extension() {
    let dir = tempfile::tempdir().unwrap();

    let rakefile = dir.path().join("Rakefile");
    fs::write(&rakefile, FIXTURE).unwrap();
    assert_eq!(outline_file(&rakefile).unwrap().len(), 1);

    let rake = dir.path().join("deploy.rake");
    fs::write(&rake, FIXTURE).unwrap();
    assert_eq!(outline_file(&rake).unwrap().len(), 1);
}

#[test]
fn test_gate_rejects_other_files_regardless_of_content() {
    let dir = tempfile::tempdir().unwrap();
    let ruby = dir.path().join("fake.rb");
    fs::write(&ruby, FIXTURE).unwrap();
    assert!(outline_file(&ruby).unwrap().is_empty());
}

#[test]
fn test_gated_file_is_not_read() {
    // A non-matching path returns an empty outline even if the file does
    // not exist.
    let missing = std::path::Path::new("/does/not/exist/app.rb");
    assert!(outline_file(missing).unwrap().is_empty());
}

#[test]
fn test_missing_rake_file_is_an_error() {
    let missing = std::path::Path::new("/does/not/exist/Rakefile");
    assert!(outline_file(missing).is_err());
}

#[test]
fn test_task_count_excludes_nested_namespaces() {
    let source = "namespace :outer do\n  task :a\n  namespace :inner do\n    task :b\n    task :c\n  end\n  task :d\nend\n";
    let symbols = outline_source(source).unwrap();

    let outer = &symbols[0];
    // Direct children: a, inner, d. Tasks b and c belong to inner only.
    assert_eq!(outer.children.len(), 3);
    let direct_tasks = outer
        .children
        .iter()
        .filter(|c| c.kind == SymbolKind::Task)
        .count();
    assert_eq!(direct_tasks, 2);

    let inner = &outer.children[1];
    assert_eq!(inner.name, "inner");
    assert_eq!(inner.children.len(), 2);
}

#[test]
fn test_real_world_rakefile() {
    let source = r#"require "rake/testtask"

Rake::TestTask.new(:test) do |t|
  t.libs << "test"
end

namespace :db do
  desc "Migrate the database"
  task migrate: :environment do
    puts "migrating"
  end

  task rollback: :environment
end

task default: :test
"#;
    let symbols = outline_source(source).unwrap();
    let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["db", "default"]);

    let db = &symbols[0];
    let db_tasks: Vec<_> = db.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(db_tasks, ["migrate", "rollback"]);
}
