//! ANSI terminal rendering of the widget surface.
//!
//! Interprets the entrance sequence by replaying its delays as short real
//! pauses, and the background gradient as a truecolor banner.

use breeze_core::animate::{Step, Target};
use breeze_core::view::{Gradient, Notice, Presentation, View};
use std::{thread, time::Duration};

/// Milliseconds per animation time-unit when replaying delays.
const TICK_MS: f64 = 150.0;

/// Width of the gradient banner, in columns.
const BANNER_WIDTH: usize = 40;

pub struct TerminalView {
    /// Replay entrance delays as real pauses.
    animate: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self { animate: true }
    }

    fn print_target(presentation: &Presentation, target: Target) {
        match target {
            Target::City => println!("{}", presentation.city),
            Target::Temp => println!("{}", presentation.temp),
            Target::Desc => println!("{}", presentation.desc),
            Target::Details => {
                println!("humidity  {}", presentation.humidity);
                println!("wind      {}", presentation.wind);
                println!("pressure  {}", presentation.pressure);
            }
            Target::Update => println!("{}", presentation.update),
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TerminalView {
    fn display(&mut self, presentation: &Presentation, gradient: Gradient, entrance: &[Step]) {
        let (from, to) = gradient.stops();
        println!("{}", gradient_banner(from, to));

        let mut elapsed = 0.0_f64;
        for step in entrance {
            if self.animate {
                let pause = (step.delay - elapsed).max(0.0);
                thread::sleep(Duration::from_millis((pause * TICK_MS) as u64));
                elapsed = step.delay;
            }
            Self::print_target(presentation, step.target);
        }
    }

    fn notice(&mut self, notice: Notice) {
        eprintln!("{}", notice.message());
    }
}

/// A single line of background-colored cells blending `from` into `to`.
fn gradient_banner(from: &str, to: &str) -> String {
    let (fr, fg, fb) = hex_rgb(from);
    let (tr, tg, tb) = hex_rgb(to);

    let mut line = String::new();
    for i in 0..BANNER_WIDTH {
        let t = i as f64 / (BANNER_WIDTH - 1) as f64;
        let r = lerp(fr, tr, t);
        let g = lerp(fg, tg, t);
        let b = lerp(fb, tb, t);
        line.push_str(&format!("\x1b[48;2;{r};{g};{b}m "));
    }
    line.push_str("\x1b[0m");
    line
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}

fn hex_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let channel = |at: usize| {
        hex.get(at..at + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    (channel(0), channel(2), channel(4))
}
