// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example main`. Debug logs go to stderr, so
//! `cargo run --example main 2>/dev/null` shows only the colors.

use xterm256_colors::{Back256, ColorLayer, ColorSupport, DifferentiateOptions, Fore256,
                      HAS_LAB_SUPPORT, XtermCodes, XtermColor, find_differentiated_colors,
                      find_differentiated_colors_by, global_color_support, hsv_distance,
                      print_color_table_to_stdout, print_differentiated_colors_to_stdout};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    // Raw escape sequences, regardless of the terminal.
    {
        println!("{}", Fore256::DARKORANGE.apply("DARKORANGE foreground"));
        println!("{}", Back256::DARKSLATEGRAY1.apply("DARKSLATEGRAY1 background"));
        println!(
            "{}{}Both at once{}",
            Fore256::GREY93,
            Back256::DEEPPINK4,
            XtermColor::reset()
        );
    }

    // Lookup at runtime.
    {
        let color = Fore256::get("SPRINGGREEN2")?;
        println!("{}", color.paint(color.describe()));
        let color = Back256::by_code(57)?;
        println!("{} {}", color.swatch(6, None), color.name());
    }

    // Honor the terminal, and try every rendering mode.
    for support in [
        ColorSupport::Ansi256,
        ColorSupport::Grayscale,
        ColorSupport::NoColor,
    ] {
        global_color_support::set_override(support);
        println!("{}", Fore256::HOTPINK.paint(format!("> {support:?}")));
    }
    global_color_support::clear_override();

    print_differentiated_colors_to_stdout(ColorLayer::Background)?;

    // Pick 8 colors, by Delta-E 2000 if available, otherwise by HSV distance.
    let picked = if HAS_LAB_SUPPORT {
        find_differentiated_colors(&Fore256::all_colors(), 8, DifferentiateOptions::default())?
    } else {
        find_differentiated_colors_by(&Fore256::all_colors(), 8, |a, b| {
            hsv_distance(a.hsv(), b.hsv())
        })?
    };
    print_color_table_to_stdout(picked, true)?;

    Ok(())
}
