pub const HELP_TITLE: &str = "Projectile Motion Equations";

/// Heading and formula lines, in the order the help overlay lists them.
pub const EQUATIONS: &[(&str, &[&str])] = &[
    ("Horizontal velocity", &["Vx = V cos(θ)"]),
    ("Vertical velocity", &["Vy = V sin(θ)"]),
    ("Position", &["x = Vx · t", "y = Vy · t − ½ g t²"]),
    ("Time of Flight", &["T = 2Vy / g"]),
    ("Maximum Height", &["H = Vy² / (2g)"]),
    ("Range", &["R = V² sin(2θ) / g"]),
];

pub fn equations_text() -> String {
    let mut text = format!("{HELP_TITLE}\n");
    for (heading, lines) in EQUATIONS {
        text.push_str(&format!("\n{heading}:\n"));
        for line in *lines {
            text.push_str(&format!("  {line}\n"));
        }
    }
    text
}
