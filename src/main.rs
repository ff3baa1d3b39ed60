use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use learnhub::OutputFormat;
use learnhub::catalog::filter::{CourseFilter, SortKey};
use learnhub::catalog::models::Level;
use learnhub::commands;
use learnhub::config;
use learnhub::logging;

#[derive(Parser)]
#[command(name = "learnhub")]
#[command(about = "Browse, buy and follow LearnHub courses from the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the course catalog
    Courses(CoursesArgs),
    /// Manage the shopping cart and check out
    Cart(CartArgs),
    /// Track learning progress
    Learn(LearnArgs),
    /// Instructor views
    Instructor(InstructorArgs),
    /// Show configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct CoursesArgs {
    #[command(subcommand)]
    action: CoursesAction,
}

#[derive(Subcommand)]
enum CoursesAction {
    /// List courses, optionally filtered and sorted
    List {
        #[arg(long, help = "Case-insensitive text in title or description")]
        search: Option<String>,
        #[arg(long, help = "Exact category name")]
        category: Option<String>,
        #[arg(long, value_enum)]
        level: Option<Level>,
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show a course and its curriculum
    Show {
        #[arg(help = "Course ID")]
        id: String,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct CartArgs {
    #[command(subcommand)]
    action: CartAction,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show {
        #[arg(long, help = "Promo code to preview")]
        promo: Option<String>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Add a course to the cart
    Add {
        #[arg(help = "Course ID")]
        course_id: String,
    },
    /// Remove a course from the cart
    Remove {
        #[arg(help = "Course ID")]
        course_id: String,
    },
    /// Buy everything in the cart
    Checkout {
        #[arg(long)]
        promo: Option<String>,
        #[arg(long, help = "Show totals without placing the order")]
        dry_run: bool,
    },
}

#[derive(Args)]
struct LearnArgs {
    #[command(subcommand)]
    action: LearnAction,
}

#[derive(Subcommand)]
enum LearnAction {
    /// Progress across enrolled courses
    Dashboard {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Where to pick up a course
    Resume {
        #[arg(help = "Course ID")]
        course_id: String,
    },
    /// Mark a lecture as completed
    Complete {
        #[arg(help = "Course ID")]
        course_id: String,
        #[arg(help = "Lecture ID")]
        lecture_id: String,
        #[arg(long, help = "Seconds watched, reported to the backend")]
        watched: Option<u64>,
    },
    /// Curriculum with completed lectures marked
    Curriculum {
        #[arg(help = "Course ID")]
        course_id: String,
    },
}

#[derive(Args)]
struct InstructorArgs {
    #[command(subcommand)]
    action: InstructorAction,
}

#[derive(Subcommand)]
enum InstructorAction {
    /// Students, revenue and ratings over your courses
    Summary {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    Set { key: String, value: String },
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config set` must work even when the current file fails validation.
    if let Commands::Config(ConfigArgs {
        action: ConfigAction::Set { key, value },
    }) = &cli.command
    {
        logging::init("learnhub=info");
        return commands::config::set(key, value);
    }

    let config = config::load()?;
    logging::init(&config.logging.level);

    let path = config::config_path()?;
    if !path.exists() {
        tracing::warn!(path = %path.display(), "no config file found, using defaults");
    }

    match cli.command {
        Commands::Courses(args) => match args.action {
            CoursesAction::List {
                search,
                category,
                level,
                sort,
                format,
            } => {
                let filter = CourseFilter {
                    search,
                    category,
                    level,
                    sort,
                };
                commands::courses::list(&config, filter, format)?;
            }
            CoursesAction::Show { id, format } => {
                commands::courses::show(&config, &id, format)?;
            }
        },
        Commands::Cart(args) => match args.action {
            CartAction::Show { promo, format } => {
                commands::cart::show(&config, promo.as_deref(), format)?;
            }
            CartAction::Add { course_id } => commands::cart::add(&config, &course_id)?,
            CartAction::Remove { course_id } => commands::cart::remove(&config, &course_id)?,
            CartAction::Checkout { promo, dry_run } => {
                commands::cart::checkout(&config, promo.as_deref(), dry_run)?;
            }
        },
        Commands::Learn(args) => match args.action {
            LearnAction::Dashboard { format } => commands::learn::dashboard(&config, format)?,
            LearnAction::Resume { course_id } => commands::learn::resume(&config, &course_id)?,
            LearnAction::Complete {
                course_id,
                lecture_id,
                watched,
            } => {
                commands::learn::complete(&config, &course_id, &lecture_id, watched)?;
            }
            LearnAction::Curriculum { course_id } => {
                commands::learn::curriculum(&config, &course_id)?;
            }
        },
        Commands::Instructor(args) => match args.action {
            InstructorAction::Summary { format } => {
                commands::instructor::summary(&config, format)?;
            }
        },
        Commands::Config(args) => match args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(&key, &config)?,
            ConfigAction::Set { key, value } => commands::config::set(&key, &value)?,
            ConfigAction::Path => println!("{}", path.display()),
        },
    }

    Ok(())
}
