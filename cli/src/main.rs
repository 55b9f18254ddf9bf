mod http;
mod token_file;


use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use portal::flows::{authorize, sign_in, sign_out};
use portal::types::{CompanyStatus, CompanyUpdate, Credentials, NewEmployee, RoleUpdate, SignupRequest};
use portal::{ApiError, GuardState, PortalApi, Role, SessionStore};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::http::HttpApi;
use crate::token_file::{DEFAULT_TOKEN_FILE, FileStorage};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `portal-cli login` first")]
    NotLoggedIn,
    #[error("missing password; pass --password or set PORTAL_PASSWORD")]
    MissingPassword,
    #[error("nothing to update; pass --name and/or --status")]
    EmptyUpdate,
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("output encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "Tenant admin portal command-line client")]
struct Cli {
    #[arg(long, env = "PORTAL_API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,

    #[arg(long, env = "PORTAL_TOKEN_FILE", default_value = DEFAULT_TOKEN_FILE)]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for tokens and print the resolved identity.
    Login(LoginArgs),
    /// Forget the stored tokens.
    Logout,
    /// Print the identity behind the stored tokens.
    Whoami,
    /// Register a company and its first admin.
    Signup(SignupArgs),
    /// Show or update the current company.
    Company(CompanyCommand),
    /// Manage employees of the current company.
    Users(UsersCommand),
    /// Audit log for the current company.
    Activities,
    /// Generated AI insights for the current company.
    Insights,
    /// Dashboard summary counters.
    Metrics,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    company_name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct CompanyCommand {
    #[command(subcommand)]
    command: CompanySubcommand,
}

#[derive(Subcommand, Debug)]
enum CompanySubcommand {
    /// Print the company profile.
    Show,
    /// Change the company name and/or status.
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_status)]
        status: Option<CompanyStatus>,
    },
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    /// List employees.
    List,
    /// Add an employee (role defaults to EMPLOYEE).
    Add {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        #[arg(long, value_parser = parse_role, default_value = "EMPLOYEE")]
        role: Role,
    },
    /// Change an employee's role.
    SetRole {
        id: i64,
        #[arg(value_parser = parse_role)]
        role: Role,
    },
    /// Remove an employee.
    Remove {
        id: i64,
    },
}

fn parse_role(raw: &str) -> Result<Role, String> {
    match Role::parse(&raw.trim().to_ascii_uppercase()) {
        Role::Unknown => Err(format!("unknown role `{raw}` (expected COMPANY_ADMIN or EMPLOYEE)")),
        role => Ok(role),
    }
}

fn parse_status(raw: &str) -> Result<CompanyStatus, String> {
    match CompanyStatus::parse(&raw.trim().to_ascii_uppercase()) {
        CompanyStatus::Unknown => Err(format!("unknown status `{raw}` (expected ACTIVE, INACTIVE or SUSPENDED)")),
        status => Ok(status),
    }
}

fn require_password(password: Option<String>) -> Result<String, CliError> {
    password.filter(|p| !p.is_empty()).ok_or(CliError::MissingPassword)
}

fn company_update(name: Option<String>, status: Option<CompanyStatus>) -> Result<CompanyUpdate, CliError> {
    let update = CompanyUpdate { name: name.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty()), status };
    if update.is_empty() {
        return Err(CliError::EmptyUpdate);
    }
    Ok(update)
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let storage = FileStorage::new(cli.token_file);
    let api = HttpApi::new(&cli.api_url, &storage)?;

    match cli.command {
        Command::Login(args) => run_login(&api, &storage, args).await,
        Command::Logout => {
            sign_out(&storage, &mut SessionStore::new());
            println!("logged out");
            Ok(())
        }
        Command::Whoami => {
            let mut session = SessionStore::new();
            if authorize(&api, &mut session).await != GuardState::Authorized {
                return Err(CliError::NotLoggedIn);
            }
            print_json(&session.user())
        }
        Command::Signup(args) => {
            let request = SignupRequest {
                company_name: args.company_name,
                email: args.email.trim().to_owned(),
                password: require_password(args.password)?,
            };
            api.signup(&request).await?;
            println!("company registered; log in with `portal-cli login --email {}`", request.email);
            Ok(())
        }
        Command::Company(company) => run_company(&api, company).await,
        Command::Users(users) => run_users(&api, users).await,
        Command::Activities => print_json(&api.activities().await?),
        Command::Insights => print_json(&api.ai_insights().await?),
        Command::Metrics => print_json(&api.dashboard_metrics().await?),
    }
}

async fn run_login(api: &HttpApi<&FileStorage>, storage: &FileStorage, args: LoginArgs) -> Result<(), CliError> {
    let credentials = Credentials { email: args.email.trim().to_owned(), password: require_password(args.password)? };
    let mut session = SessionStore::new();
    let user = sign_in(api, storage, &credentials).await?;
    session.set_user(Some(user));
    tracing::info!(path = %storage.path().display(), "tokens stored");
    print_json(&session.user())
}

async fn run_company(api: &HttpApi<&FileStorage>, company: CompanyCommand) -> Result<(), CliError> {
    match company.command {
        CompanySubcommand::Show => print_json(&api.company().await?),
        CompanySubcommand::Update { name, status } => {
            let update = company_update(name, status)?;
            print_json(&api.update_company(&update).await?)
        }
    }
}

async fn run_users(api: &HttpApi<&FileStorage>, users: UsersCommand) -> Result<(), CliError> {
    match users.command {
        UsersSubcommand::List => print_json(&api.employees().await?),
        UsersSubcommand::Add { email, password, role } => {
            let employee = NewEmployee { email: email.trim().to_owned(), password: require_password(password)?, role };
            api.create_employee(&employee).await?;
            println!("added {}", employee.email);
            Ok(())
        }
        UsersSubcommand::SetRole { id, role } => {
            api.update_employee_role(id, &RoleUpdate { role }).await?;
            println!("user {id} is now {}", role.as_str());
            Ok(())
        }
        UsersSubcommand::Remove { id } => {
            api.delete_employee(id).await?;
            println!("removed user {id}");
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
