mod support;

use std::sync::Arc;

use support::{make_tugas, FakeTugasApi};
use tugas::app::{ActiveScreen, App};
use tugas::commands::Command;
use tugas::navigation::{Route, Tab};
use tugas::notice::Notice;
use tugas::session::{MemoryTokenStore, TokenStore};

async fn run(app: &mut App, line: &str) -> tugas::screens::Outcome {
    let command = Command::parse(line).expect("valid command");
    app.dispatch(command).await
}

#[tokio::test]
async fn starts_on_login_without_token() {
    let api = Arc::new(FakeTugasApi::new());
    let (app, outcome) = App::start(api.clone(), Arc::new(MemoryTokenStore::new())).await;

    assert_eq!(app.current_route(), Route::Login);
    assert!(outcome.notices.is_empty());
    assert_eq!(api.calls.total(), 0);
}

#[tokio::test]
async fn starts_on_home_with_token() {
    let api = Arc::new(FakeTugasApi::with_tugas(vec![make_tugas(
        "a1",
        "Basis Data",
        1,
        "2024-06-10",
    )]));
    let (app, _) = App::start(api, Arc::new(MemoryTokenStore::with_token("jwt"))).await;

    assert_eq!(app.current_route(), Route::Main(Tab::Home));
    let rendered = app.render();
    assert!(rendered.contains("Welcome, Siti Rahma!"));
    assert!(rendered.contains("[Home] | Tugas | Profile"));
}

#[tokio::test]
async fn login_add_task_and_logout() {
    let api = Arc::new(FakeTugasApi::new());
    let tokens = Arc::new(MemoryTokenStore::new());
    let (mut app, _) = App::start(api.clone(), tokens.clone()).await;

    run(&mut app, "set email siti@kampus.ac.id").await;
    run(&mut app, "set password rahasia").await;
    let outcome = run(&mut app, "submit").await;
    assert_eq!(outcome.notices, vec![Notice::success("Login successful!")]);
    assert_eq!(app.current_route(), Route::Main(Tab::Home));
    assert!(tokens.load().await.unwrap().is_some());

    run(&mut app, "goto tugas").await;
    assert_eq!(app.current_route(), Route::Main(Tab::Tugas));
    run(&mut app, "set mata_kuliah Sistem Operasi").await;
    run(&mut app, "set tugas_ke 5").await;
    run(&mut app, "set tenggat_kumpul 2024-08-01").await;
    let outcome = run(&mut app, "submit").await;
    assert_eq!(outcome.notices, vec![Notice::success("Tugas added successfully!")]);
    match app.screen() {
        ActiveScreen::Tugas(screen) => {
            assert_eq!(screen.tugas.len(), 1);
            assert_eq!(screen.tugas[0].mata_kuliah, "Sistem Operasi");
        }
        _ => panic!("expected the tugas screen"),
    }

    run(&mut app, "edit 1").await;
    match app.screen() {
        ActiveScreen::Tugas(screen) => {
            assert!(screen.is_edit_mode());
            assert_eq!(screen.form.tugas_ke, "5");
        }
        _ => panic!("expected the tugas screen"),
    }

    run(&mut app, "goto profile").await;
    let outcome = run(&mut app, "logout").await;
    assert_eq!(
        outcome.notices,
        vec![Notice::new("Logout", "You have successfully logged out.")]
    );
    assert_eq!(app.current_route(), Route::Login);
    assert_eq!(tokens.load().await.unwrap(), None);
}

#[tokio::test]
async fn leaving_a_tab_discards_its_form() {
    let api = Arc::new(FakeTugasApi::new());
    let (mut app, _) = App::start(api, Arc::new(MemoryTokenStore::with_token("jwt"))).await;

    run(&mut app, "goto tugas").await;
    run(&mut app, "set mata_kuliah Fisika").await;
    run(&mut app, "goto home").await;
    run(&mut app, "goto tugas").await;

    match app.screen() {
        ActiveScreen::Tugas(screen) => assert!(screen.form.mata_kuliah.is_empty()),
        _ => panic!("expected the tugas screen"),
    }
}

#[tokio::test]
async fn main_tabs_need_a_session() {
    let api = Arc::new(FakeTugasApi::new());
    let (mut app, _) = App::start(api.clone(), Arc::new(MemoryTokenStore::new())).await;

    let outcome = run(&mut app, "goto tugas").await;
    assert_eq!(outcome.notices, vec![Notice::info("Please log in first.")]);
    assert_eq!(app.current_route(), Route::Login);

    run(&mut app, "goto register").await;
    assert_eq!(app.current_route(), Route::Register);
    run(&mut app, "back").await;
    assert_eq!(app.current_route(), Route::Login);
    assert_eq!(api.calls.total(), 0);
}

#[tokio::test]
async fn commands_out_of_place_are_informational() {
    let api = Arc::new(FakeTugasApi::new());
    let (mut app, _) = App::start(api, Arc::new(MemoryTokenStore::new())).await;

    let outcome = run(&mut app, "logout").await;
    assert_eq!(
        outcome.notices,
        vec![Notice::info("Nothing to logout on this screen")]
    );
    let outcome = run(&mut app, "set mata_kuliah Fisika").await;
    assert_eq!(
        outcome.notices,
        vec![Notice::info("No field mata_kuliah on this screen")]
    );
    assert!(!outcome.has_error());
}
