// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("spacman")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Spacman Contributors")
        .about("Keep installed pacman packages in sync with a declared list")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .env("SPACMAN_CONFIG")
                .help("Want-list file (plain list, or a model file ending in .toml)"),
        )
        .arg(
            Arg::new("pacman")
                .short('p')
                .long("pacman")
                .value_name("CMD")
                .env("SPACMAN_PACMAN")
                .default_value("sudo pacman")
                .help("Package manager command used with --apply"),
        )
        .arg(
            Arg::new("apply")
                .short('a')
                .long("apply")
                .action(ArgAction::SetTrue)
                .help("Remove and install packages to match the want list"),
        )
        .arg(
            Arg::new("query")
                .short('q')
                .long("query")
                .action(ArgAction::SetTrue)
                .help("Print the wanted packages and exit"),
        )
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .value_name("PATH")
                .help("Read saved `pacman -Qi` output instead of querying pacman"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the plan and diagnostics as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell to generate completions for"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("spacman.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
