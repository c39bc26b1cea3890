//! Shell completions command implementation.
//!
//! Generate shell completions for bash, zsh, fish, and powershell.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell as ClapShell};

use crate::cli::{Cli, Shell};

/// Generate shell completions for the given shell and write to stdout.
pub fn execute(shell: &Shell) -> io::Result<()> {
    let clap_shell = match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::Powershell => ClapShell::PowerShell,
    };

    let mut cmd = Cli::command();
    generate(clap_shell, &mut cmd, "fxc", &mut io::stdout());

    Ok(())
}
