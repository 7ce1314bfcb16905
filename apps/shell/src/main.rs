//! Shell Entry Point
//!
//! Text stand-in for the app's screens. Wires the file store, the session
//! manager, and the navigator together, then drives them from a command
//! prompt the way the login and placeholder screens would. Uses `anyhow`
//! for startup errors; session errors are printed and the loop continues.

use std::env;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use auth::validation::{validate_email, validate_password};
use auth::{
    AuthConfig, Credentials, KvSessionRepository, MockIdentityProvider, RegisterInput,
    SessionManager,
};
use nav::{Navigator, Route, spawn_auth_routing};
use storage::FileStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type ShellManager = SessionManager<MockIdentityProvider, KvSessionRepository<FileStore>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shell=info,auth=info,nav=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_file =
        env::var("SHELL_DATA_FILE").unwrap_or_else(|_| "shell-session.json".to_string());
    let fresh_session = env::var("SHELL_FRESH_SESSION").is_ok_and(|v| v == "1");

    let config = if fresh_session {
        AuthConfig::fresh_each_launch()
    } else {
        AuthConfig::default()
    };
    tracing::info!(data_file = %data_file, restore = config.restore_session, "Starting shell");

    let manager: Arc<ShellManager> = Arc::new(SessionManager::new(
        MockIdentityProvider::new().with_latency(Duration::from_millis(500)),
        KvSessionRepository::new(FileStore::new(&data_file)),
        config,
    ));

    let navigator = Navigator::new();
    let _routing = spawn_auth_routing(navigator.clone(), manager.subscribe());
    navigator.set_ready();

    manager.initialize().await?;

    println!("commands: login <user> <pass> | register <email> <pass> <name..> |");
    println!("          logout | go <route> | back | route | whoami | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["login", username, password] => login(&manager, username, password).await,
            ["logout"] => match manager.logout().await {
                Ok(()) => println!("signed out"),
                Err(err) => {
                    err.log();
                    println!("signed out, but: {err}");
                }
            },
            ["register", email, password, name @ ..] if !name.is_empty() => {
                match manager
                    .register(RegisterInput {
                        email: (*email).to_string(),
                        password: (*password).to_string(),
                        name: name.join(" "),
                    })
                    .await
                {
                    Ok(user) => println!("registered {} <{}>", user.name, user.email),
                    Err(err) => {
                        err.log();
                        println!("{err}");
                    }
                }
            }
            ["go", code] => go(&manager, &navigator, code),
            ["back"] => match navigator.go_back() {
                Some(route) => println!("at {route}"),
                None => println!("already at the root"),
            },
            ["route"] => {
                // Give the routing task a beat to apply any pending reset.
                tokio::time::sleep(Duration::from_millis(20)).await;
                match navigator.current() {
                    Some(route) => println!("{route} (depth {})", navigator.depth()),
                    None => println!("no route yet"),
                }
            }
            ["whoami"] => match manager.state().user {
                Some(user) => println!("{} <{}> role={}", user.name, user.email, user.role),
                None => println!("not signed in"),
            },
            _ => println!("unknown command"),
        }
    }

    Ok(())
}

/// The login screen's job: format checks first, then the auth store
async fn login(manager: &ShellManager, username: &str, password: &str) {
    let mut errors = Vec::new();
    if username.contains('@') {
        // Email-shaped identifier gets the email format check
        if let Some(err) = validate_email(username) {
            errors.push(err);
        }
    }
    if let Some(err) = validate_password(password) {
        errors.push(err);
    }
    if !errors.is_empty() {
        for err in errors {
            println!("{err}");
        }
        return;
    }

    match manager.login(Credentials::new(username, password)).await {
        Ok(user) => println!("signed in as {} ({})", user.name, user.role),
        Err(err) => {
            err.log();
            println!("{err}");
        }
    }
}

fn go(manager: &ShellManager, navigator: &Navigator, code: &str) {
    let Some(route) = Route::from_code(code) else {
        println!(
            "unknown route; one of: {}",
            Route::ALL.map(|r| r.code()).join(", ")
        );
        return;
    };
    if route.is_protected() && !manager.state().is_authenticated {
        println!("sign in first");
        return;
    }
    match navigator.navigate(route) {
        Ok(()) => println!("at {route}"),
        Err(err) => {
            // Navigation failures are logged and swallowed, never fatal.
            tracing::warn!(error = %err, route = %route, "Navigation failed");
            println!("{err}");
        }
    }
}
