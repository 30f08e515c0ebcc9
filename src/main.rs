use campusgate::logging;
use campusgate::modules::guard::RouteDecision;
use campusgate::modules::session::{LoginRequest, RegisterRequest};
use campusgate::registry::DEFAULT_SECTION;
use campusgate::state::{AppState, init_app_state};
use campusgate_models::value_types::Email;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "campusgate")]
#[command(about = "Campusgate - Access control for the college dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Create a student account and sign in
    Register {
        /// Full name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Clear the session
    Logout,
    /// Show the current session
    Whoami,
    /// List the sections visible to the current session
    Nav,
    /// Check whether the current session may open a section
    Open {
        /// Section identifier, e.g. "grades"
        section: String,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init_tracing();

    let state = init_app_state();
    state.session.restore().await;

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, password } => handle_login(&state, email, password).await,
        Commands::Register {
            name,
            email,
            password,
        } => handle_register(&state, name, email, password).await,
        Commands::Logout => handle_logout(&state).await,
        Commands::Whoami => handle_whoami(&state),
        Commands::Nav => handle_nav(&state),
        Commands::Open { section } => handle_open(&state, &section),
    }
}

async fn handle_login(state: &AppState, email: Option<String>, password: Option<String>) {
    let email = prompt_email(email);
    let password = prompt_password(password);

    match state.session.login(LoginRequest { email, password }).await {
        Ok(identity) => {
            println!("\n✅ Signed in successfully!");
            println!("   Name: {}", identity.name);
            println!("   Role: {}", identity.role());
        }
        Err(e) => {
            eprintln!("\n❌ Error signing in: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_register(
    state: &AppState,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) {
    let name = name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Full name")
            .interact_text()
            .expect("Failed to read name")
    });
    let email = prompt_email(email);
    let password = prompt_password(password);

    match state
        .session
        .register(RegisterRequest {
            name,
            email,
            password,
        })
        .await
    {
        Ok(identity) => {
            println!("\n✅ Account created!");
            println!("   Name: {}", identity.name);
            println!("   Role: {}", identity.role());
        }
        Err(e) => {
            eprintln!("\n❌ Error registering: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_logout(state: &AppState) {
    state.session.logout().await;
    println!("✅ Signed out");
}

fn handle_whoami(state: &AppState) {
    match state.session.snapshot().identity() {
        Some(identity) => {
            println!("{} <{}>", identity.name, identity.email);
            println!("Role: {}", identity.role());
            if let Some(department) = identity.department() {
                println!("Department: {}", department);
            }
        }
        None => println!("Not signed in"),
    }
}

fn handle_nav(state: &AppState) {
    let session = state.session.snapshot();
    let entries = state.nav.visible_entries(&session);

    if entries.is_empty() {
        println!("No sections visible (not signed in)");
        return;
    }

    for entry in entries {
        println!("{:<14} {} ({})", entry.section, entry.label, entry.icon);
    }
}

fn handle_open(state: &AppState, section: &str) {
    let session = state.session.snapshot();

    match state.guard.evaluate(&session, section) {
        Ok(RouteDecision::Allowed) => println!("✅ {} is open to you", section),
        Ok(RouteDecision::RedirectToLogin) => {
            println!("❌ Not signed in; redirecting to login");
        }
        Ok(RouteDecision::RedirectToDefault) => {
            println!("❌ Not permitted; redirecting to {}", DEFAULT_SECTION);
        }
        Ok(RouteDecision::Pending) => println!("⏳ Session still settling; try again"),
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn prompt_email(email: Option<String>) -> Email {
    let raw = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    match Email::new(raw) {
        Ok(email) => email,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn prompt_password(password: Option<String>) -> String {
    password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .interact()
            .expect("Failed to read password")
    })
}
