use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::args::Arg;

pub fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("Usage: {bin_name} [options ...] <image1,image2,image3 ...>");
    println!();
    println!("Options:");
    for arg in Arg::VARIANTS {
        let name: &'static str = arg.into();
        println!("  -{}, --{:<13} {}", arg.short(), name, arg.help_text());
    }
}

pub fn print_help_and_exit(bin_name: &str) -> ! {
    print_help(bin_name);
    std::process::exit(0);
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    format!(
        "{} {} {cpu}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}
