use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::commands::CommandLine;

pub fn completion(shell: Shell) {
    let mut cmd = CommandLine::command();
    let bin_name: String = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
