use clap::Parser;
use xshell::cmd;

#[derive(Debug, clap::Args)]
struct BuildArgs {
    #[arg(long, short)]
    release: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Builds the site bundle with trunk
    Build(BuildArgs),
    /// Runs the trunk development server with the API proxies active
    Serve,
}

#[derive(Debug, clap::Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn build(args: &BuildArgs) -> anyhow::Result<()> {
    let release = args.release.then_some("--release");

    let shell = xshell::Shell::new()?;
    let _dir = shell.push_dir("cine-site");
    cmd!(shell, "trunk build {release...}").run()?;

    Ok(())
}

fn serve() -> anyhow::Result<()> {
    let shell = xshell::Shell::new()?;
    let _dir = shell.push_dir("cine-site");
    cmd!(shell, "trunk serve").run()?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Build(build_args) => build(&build_args),
        Command::Serve => serve(),
    }
}
