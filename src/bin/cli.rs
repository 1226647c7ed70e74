use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use contactbook::{
    Config,
    client::{ApiClient, Notice, SortDirection, UserForm, UserList, flows},
    core::{models::user::User, validation::Field},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contactbook-cli", version, about = "Manage contact book records over the HTTP API")]
struct Cli {
    /// Overrides API_BASE_URL
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the user table
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// Column to sort by; repeat the same column to flip to descending
        #[arg(long = "sort", value_enum)]
        sort: Vec<Column>,
    },
    Get {
        id: String,
    },
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        state: String,
    },
    /// Fetch a record, overlay the given fields and save it
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        state: Option<String>,
    },
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Column {
    Name,
    Email,
    Phone,
    State,
}

impl From<Column> for Field {
    fn from(column: Column) -> Self {
        match column {
            Column::Name => Field::Name,
            Column::Email => Field::Email,
            Column::Phone => Field::Phone,
            Column::State => Field::State,
        }
    }
}

fn report(notice: &Notice) -> ExitCode {
    if notice.is_error() {
        eprintln!("error: {}", notice.message);
        ExitCode::FAILURE
    } else {
        println!("{}", notice.message);
        ExitCode::SUCCESS
    }
}

fn report_form_errors(form: &UserForm) {
    for (field, message) in form.errors() {
        eprintln!("  {}: {}", field, message);
    }
}

fn print_user(user: &User) {
    println!("id:    {}", user.id);
    println!("name:  {}", user.name);
    println!("email: {}", user.email);
    println!("phone: {}", user.phone);
    println!("state: {}", user.state);
}

fn print_table(list: &UserList) {
    let rows = list.view();
    if rows.is_empty() {
        println!("No Data to Display. {}", list.empty_message());
        return;
    }
    if let Some(spec) = list.sort() {
        let arrow = match spec.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        println!("sorted by {} ({})", spec.column, arrow);
    }
    println!(
        "{:>3}  {:<36}  {:<24}  {:<28}  {:<10}  {}",
        "#", "id", "name", "email", "phone", "state"
    );
    for (index, user) in rows.iter().enumerate() {
        println!(
            "{:>3}  {:<36}  {:<24}  {:<28}  {:<10}  {}",
            index + 1,
            user.id.to_string(),
            user.name,
            user.email,
            user.phone,
            user.state
        );
    }
}

fn confirm_delete(user: &User) -> bool {
    print!("Are you sure you want to delete {} ({})? [y/N] ", user.name, user.id);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

async fn run(cli: Cli, client: ApiClient) -> ExitCode {
    match cli.command {
        Command::List { search, sort } => {
            let mut list = UserList::new();
            if let Some(notice) = flows::refresh_list(&mut list, &client).await {
                return report(&notice);
            }
            list.set_search_term(search);
            for column in sort {
                list.click_column(column.into());
            }
            print_table(&list);
            ExitCode::SUCCESS
        }
        Command::Get { id } => match flows::fetch_user(&client, &id).await {
            Ok(user) => {
                print_user(&user);
                ExitCode::SUCCESS
            }
            Err(notice) => report(&notice),
        },
        Command::Add {
            name,
            email,
            phone,
            state,
        } => {
            let mut form = UserForm::new();
            form.input(Field::Name, name);
            form.input(Field::Email, email);
            form.input(Field::Phone, phone);
            form.input(Field::State, state);
            let (notice, created) = flows::submit_add(&mut form, &client).await;
            report_form_errors(&form);
            if let Some(user) = created {
                print_user(&user);
            }
            report(&notice)
        }
        Command::Update {
            id,
            name,
            email,
            phone,
            state,
        } => {
            let mut form = UserForm::new();
            if let Err(notice) = flows::load_for_update(&mut form, &client, &id).await {
                return report(&notice);
            }
            let overrides = [
                (Field::Name, name),
                (Field::Email, email),
                (Field::Phone, phone),
                (Field::State, state),
            ];
            for (field, value) in overrides {
                if let Some(value) = value {
                    form.input(field, value);
                }
            }
            let (notice, updated) = flows::submit_update(&mut form, &client, &id).await;
            report_form_errors(&form);
            if let Some(user) = updated {
                print_user(&user);
            }
            report(&notice)
        }
        Command::Delete { id, yes } => {
            let user = match flows::fetch_user(&client, &id).await {
                Ok(user) => user,
                Err(notice) => return report(&notice),
            };
            let mut list = UserList::new();
            list.loaded(vec![user.clone()]);
            let confirm = |u: &User| yes || confirm_delete(u);
            match flows::delete_with_confirmation(&mut list, &client, &user, confirm).await {
                Some(notice) => report(&notice),
                None => {
                    println!("Cancelled");
                    ExitCode::SUCCESS
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli.api_base_url.clone().unwrap_or(config.api_base_url);
    run(cli, ApiClient::new(base_url)).await
}
