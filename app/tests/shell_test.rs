//! Line commands against a file-backed app

#![allow(clippy::unwrap_used)] // Tests can unwrap

use std::num::NonZeroUsize;
use std::sync::Arc;
use tempfile::tempdir;
use todomvc::shell::execute;
use todomvc::{App, Command, CommandError, Config, Flow};
use todomvc_core::{Storage, TodoRepository};
use todomvc_storage::FileStorage;
use todomvc_testing::SequentialIdGenerator;

fn config(dir: &std::path::Path) -> Config {
    Config {
        data_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

async fn start(config: &Config) -> App {
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&config.data_dir));
    App::start(config, storage, Arc::new(SequentialIdGenerator::new()), None)
        .await
        .unwrap()
}

async fn run(app: &mut App, line: &str) -> Result<Flow, CommandError> {
    execute(app, Command::from_line(line).unwrap()).await
}

async fn titles(app: &App) -> Vec<String> {
    app.state(|s| s.filtered_items().iter().map(|i| i.title.clone()).collect())
        .await
}

#[tokio::test]
async fn test_session_edits_and_persists() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    let mut app = start(&config).await;

    run(&mut app, "add Buy milk").await.unwrap();
    run(&mut app, "add Walk dog").await.unwrap();
    run(&mut app, "add Read book").await.unwrap();
    run(&mut app, "toggle 1").await.unwrap();
    run(&mut app, "edit 2 Walk the dog").await.unwrap();
    run(&mut app, "cancel 3 Burn book").await.unwrap();

    assert_eq!(titles(&app).await, ["Buy milk", "Walk the dog", "Read book"]);

    run(&mut app, "go active").await.unwrap();
    assert_eq!(titles(&app).await, ["Walk the dog", "Read book"]);
    run(&mut app, "rm 2").await.unwrap();
    assert_eq!(titles(&app).await, ["Walk the dog"]);

    run(&mut app, "go #/all").await.unwrap();
    run(&mut app, "clear").await.unwrap();
    assert_eq!(titles(&app).await, ["Walk the dog"]);

    let repository = TodoRepository::new(Arc::new(FileStorage::new(dir.path())), "todos-javascript");
    let saved = repository.load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Walk the dog");
}

#[tokio::test]
async fn test_toggle_all_flips_between_states() {
    let dir = tempdir().unwrap();
    let mut app = start(&config(dir.path())).await;
    run(&mut app, "add Buy milk").await.unwrap();
    run(&mut app, "add Walk dog").await.unwrap();

    run(&mut app, "toggle-all").await.unwrap();
    assert!(app.state(|s| s.active_items().is_empty()).await);

    run(&mut app, "toggle-all").await.unwrap();
    assert!(app.state(|s| s.completed_items().is_empty()).await);
}

#[tokio::test]
async fn test_positions_outside_view_are_errors() {
    let dir = tempdir().unwrap();
    let mut app = start(&config(dir.path())).await;
    run(&mut app, "add Buy milk").await.unwrap();

    assert_eq!(run(&mut app, "rm 2").await, Err(CommandError::NoSuchItem(2)));
    assert_eq!(app.state(|s| s.count()).await, 1);
}

#[tokio::test]
async fn test_quit_stops_and_show_prints() {
    let dir = tempdir().unwrap();
    let mut app = start(&config(dir.path())).await;
    run(&mut app, "add Buy milk").await.unwrap();

    assert_eq!(run(&mut app, "show").await, Ok(Flow::Continue));
    let page = app.document().to_string();
    assert!(page.contains("<label>Buy milk</label>"));
    assert!(page.contains("1 item left"));

    assert_eq!(run(&mut app, "quit").await, Ok(Flow::Quit));
}

#[tokio::test]
async fn test_reopen_reads_previous_session() {
    let dir = tempdir().unwrap();
    let config = config(dir.path());
    {
        let mut app = start(&config).await;
        run(&mut app, "add Buy milk").await.unwrap();
        run(&mut app, "toggle 1").await.unwrap();
    }

    let app = start(&config).await;
    assert_eq!(titles(&app).await, ["Buy milk"]);
    assert!(app.state(|s| s.items[0].completed).await);
    assert!(dir.path().join("todos-javascript.json").is_file());
}

#[tokio::test]
async fn test_position_past_the_end_is_no_such_item() {
    let dir = tempdir().unwrap();
    let mut app = start(&config(dir.path())).await;
    run(&mut app, "add Buy milk").await.unwrap();

    let toggle = Command::Toggle { n: NonZeroUsize::MAX };
    assert_eq!(
        execute(&mut app, toggle).await,
        Err(CommandError::NoSuchItem(usize::MAX))
    );
    assert!(Command::from_line("toggle 0").is_err());
    assert!(app.state(|s| s.active_items().len() == 1).await);
}
