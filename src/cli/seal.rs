//! Seal CLI command
//!
//! Protects a directory of plain dataset files with a password so the
//! result can be published as a deployment root.

use std::path::Path;

use super::session::{prompt_new_password, PasswordSource};
use crate::crypto::PBKDF2_ITERATIONS;
use crate::error::FinboardResult;
use crate::export::seal_directory;

/// Handle `finboard seal <input_dir> <output_dir>`
pub fn handle_seal_command(
    input_dir: &Path,
    output_dir: &Path,
    password: &PasswordSource,
) -> FinboardResult<()> {
    let prompted;
    let password = match password {
        PasswordSource::Given(p) => p,
        PasswordSource::Prompt => {
            prompted = prompt_new_password()?;
            &prompted
        }
    };

    let report = seal_directory(input_dir, output_dir, password)?;

    println!(
        "Sealed {} dataset(s) with PBKDF2-SHA256 ({} iterations) and AES-256-CBC:",
        report.sealed.len(),
        PBKDF2_ITERATIONS
    );
    for (dataset, path) in &report.sealed {
        println!("  {:<16} {}", dataset.to_string(), path.display());
    }
    for dataset in &report.skipped {
        println!("  {:<16} skipped (no input file)", dataset.to_string());
    }
    println!();
    println!(
        "Publish {} and open it with: finboard --root {} show",
        output_dir.display(),
        output_dir.display()
    );

    Ok(())
}
