use std::fs;
use std::path::Path;

use clap::CommandFactory;

// cli.rs only needs clap and clap_complete, both build-dependencies.
#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let Some(out_dir) = std::env::var_os("OUT_DIR") else {
        panic!("OUT_DIR not set by Cargo");
    };
    let man_dir = Path::new(&out_dir).join("man");
    fs::create_dir_all(&man_dir)
        .unwrap_or_else(|e| panic!("failed to create {}: {e}", man_dir.display()));

    // ifsort.1, ifsort-scan.1, ifsort-config-init.1, ...
    let mut pages = Vec::new();
    collect_pages(cli::Cli::command(), &mut pages);

    for page in pages {
        let path = man_dir.join(format!("{}.1", page.get_name()));
        let mut buf = Vec::new();
        clap_mangen::Man::new(page)
            .render(&mut buf)
            .unwrap_or_else(|e| panic!("failed to render {}: {e}", path.display()));
        fs::write(&path, buf)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
    }
}

/// Flatten the command tree, prefixing each subcommand with its parent's name.
fn collect_pages(cmd: clap::Command, pages: &mut Vec<clap::Command>) {
    let parent = cmd.get_name().to_owned();
    let children: Vec<clap::Command> = cmd
        .get_subcommands()
        .filter(|sub| !sub.is_hide_set() && sub.get_name() != "help")
        .map(|sub| sub.clone().name(format!("{parent}-{}", sub.get_name())))
        .collect();

    pages.push(cmd);
    for child in children {
        collect_pages(child, pages);
    }
}
