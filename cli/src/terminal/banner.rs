use colored::*;

use super::print;

const BANNER: &str = r#"
                     _                             _
                __ _(_)_ __        _ __ ___   __ _| | _____
               / _` | | '_ \ _____| '_ ` _ \ / _` | |/ / _ \
              | (_| | | | | |_____| | | | | | (_| |   <  __/
               \__, |_|_| |_|     |_| |_| |_|\__,_|_|\_\___|
               |___/
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.cyan()));
}
