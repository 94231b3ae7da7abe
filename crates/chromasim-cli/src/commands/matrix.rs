use chromasim_cli::build_effective_matrix;

/// Print the derived effective matrix for the given flags, one 5-column
/// row per output channel.
pub fn cmd_matrix(
    protan: Option<f32>,
    deutan: Option<f32>,
    grayscale: bool,
) -> Result<(), String> {
    let effective = build_effective_matrix(protan, deutan, grayscale)?;

    println!("{}", effective.label);
    for (row, channel) in ["R", "G", "B", "A"].iter().enumerate() {
        let coeffs = &effective.coefficients[row * 5..row * 5 + 5];
        println!(
            "  {}: [{:.4}, {:.4}, {:.4}, {:.4}, {:.4}]",
            channel, coeffs[0], coeffs[1], coeffs[2], coeffs[3], coeffs[4]
        );
    }

    Ok(())
}
