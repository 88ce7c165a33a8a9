use anyhow::Result;
use clap::{Parser, Subcommand};
use joegit::areas::repository::Repository;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "JOEGIT_LOG";

#[derive(Parser)]
#[command(
    name = "joegit",
    version = "0.1.0",
    about = "A tiny content-addressed version-control tool",
    long_about = "joegit snapshots a working directory into content-addressed objects, \
    chains the snapshots into commits and restores any of them on demand. \
    Repository metadata lives in the .joegit directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "repo",
        global = true,
        default_value = ".",
        help = "Run as if joegit was started in this directory"
    )]
    repo: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .joegit directory with an empty object store and ref namespaces."
    )]
    Init,
    #[command(
        name = "hash-object",
        about = "Compute a file's object ID and optionally store it",
        long_about = "This command hashes a file as a blob. \
        With --write the blob is also written to the object database."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1, help = "The file to hash, relative to the repository")]
        file: PathBuf,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command resolves a name and prints the object it points to. \
        Blobs are printed byte for byte."
    )]
    CatFile {
        #[arg(index = 1, help = "A tag, ref, @ or object ID")]
        object: String,
    },
    #[command(
        name = "write-tree",
        about = "Snapshot the working directory as a tree",
        long_about = "This command stores every file of the working directory and prints the root tree ID."
    )]
    WriteTree,
    #[command(
        name = "read-tree",
        about = "Replace the working directory with a tree",
        long_about = "This command empties the working directory and writes out every file of the given tree. \
        Uncommitted changes are lost."
    )]
    ReadTree {
        #[arg(index = 1, help = "A tag, ref, @ or tree ID")]
        tree: String,
    },
    #[command(
        name = "ls-tree",
        about = "List every file of a tree",
        long_about = "This command prints the blob ID and path of every file reachable from a tree or commit."
    )]
    LsTree {
        #[arg(index = 1, default_value = "@", help = "A tag, ref, @ or object ID")]
        object: String,
    },
    #[command(
        name = "commit",
        about = "Record a snapshot of the working directory",
        long_about = "This command creates a new commit with the current working directory on top of HEAD."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command shows the commits reachable from the given commit, newest first."
    )]
    Log {
        #[arg(index = 1, help = "Where to start (defaults to HEAD)")]
        commit: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Restore a commit into the working directory",
        long_about = "This command replaces the working directory with the commit's snapshot and moves HEAD to it."
    )]
    Checkout {
        #[arg(index = 1, help = "A tag, ref, @ or commit ID")]
        commit: String,
    },
    #[command(
        name = "tag",
        about = "Create or list tags",
        long_about = "With a name this command tags the given commit (HEAD by default). \
        Without arguments it lists every tag."
    )]
    Tag {
        #[arg(index = 1, help = "The tag name")]
        name: Option<String>,
        #[arg(index = 2, help = "What to tag (defaults to HEAD)")]
        commit: Option<String>,
    },
    #[command(
        name = "rev-parse",
        about = "Resolve a name to an object ID",
        long_about = "This command prints the object ID a tag, ref, @ or object ID resolves to."
    )]
    RevParse {
        #[arg(index = 1, help = "The name to resolve")]
        name: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let repository = Repository::new(&cli.repo, Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Init => repository.init()?,
        Commands::HashObject { write, file } => {
            let object_id = repository.hash_object(file, *write)?;
            writeln!(repository.writer(), "{object_id}")?;
        }
        Commands::CatFile { object } => repository.cat_file(object)?,
        Commands::WriteTree => repository.print_write_tree()?,
        Commands::ReadTree { tree } => {
            let tree_oid = repository.get_oid(tree)?;
            repository.read_tree(&tree_oid)?
        }
        Commands::LsTree { object } => repository.ls_tree(object)?,
        Commands::Commit { message } => repository.print_commit(message)?,
        Commands::Log { commit } => repository.log(commit.as_deref())?,
        Commands::Checkout { commit } => repository.checkout_name(commit)?,
        Commands::Tag { name, commit } => repository.tag(name.as_deref(), commit.as_deref())?,
        Commands::RevParse { name } => repository.rev_parse(name)?,
    }

    repository.writer().flush()?;

    Ok(())
}
