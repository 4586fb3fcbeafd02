//! # RC Design CLI
//!
//! Terminal interface for the rc_core flexural design engine: prompts for
//! the section, materials, and factored moment, runs the selected code
//! procedure, and prints the design report, candidate rebar arrangements,
//! and the raw JSON result for API/LLM use.

use std::io::{self, BufRead, Write};

use rc_core::flexure::{design, verify_provided_steel, CodeVariant, FlexureInput, SectionGeometry};
use rc_core::materials::{MaterialProperties, SteelGrade};
use rc_core::rebar::options_for;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_code_variant() -> CodeVariant {
    print!("Design code (1 = ACI 318, 2 = ECP 203) [1]: ");
    if io::stdout().flush().is_err() {
        return CodeVariant::Aci;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return CodeVariant::Aci;
    }

    match input.trim() {
        "2" => CodeVariant::Ecp,
        _ => CodeVariant::Aci,
    }
}

fn main() {
    println!("RC Design CLI - Flexural Reinforcement Calculator");
    println!("=================================================");
    println!();

    let code = prompt_code_variant();
    let fy = prompt_f64("Steel yield strength fy (MPa) [420]: ", 420.0);
    let fc = prompt_f64("Concrete strength f'c/fcu (MPa) [25]: ", 25.0);
    let b = prompt_f64("Section width b (mm) [1000]: ", 1000.0);
    let h = prompt_f64("Total depth h (mm) [150]: ", 150.0);
    let cover = prompt_f64("Cover to steel centroid (mm) [20]: ", 20.0);
    let mu = prompt_f64("Factored moment Mu (kN.m) [13.7]: ", 13.7);

    let input = FlexureInput {
        label: "CLI".to_string(),
        material: MaterialProperties::new(fy, fc),
        geometry: SectionGeometry::new(b, h, cover),
        mu_knm: mu,
    };

    println!();
    println!("Designing per {}...", code);
    println!();

    match design(&input, code) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  FLEXURAL DESIGN RESULTS ({})", code);
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Section:   {:.0} x {:.0} mm (cover {:.0} mm)", b, h, cover);
            println!("  d:         {:.1} mm", result.effective_depth_mm);
            match SteelGrade::from_fy_mpa(fy) {
                Some(grade) => {
                    println!("  Materials: {} | fc = {:.0} MPa", grade, fc)
                }
                None => println!("  Materials: fy = {:.0} MPa | fc = {:.0} MPa", fy, fc),
            }
            println!("  Demand:    Mu = {:.2} kN.m", mu);
            println!();
            println!("Steel Requirement:");
            println!("  As,calc = {:.1} mm²", result.calculated_steel_area_mm2);
            println!("  As,min  = {:.1} mm²", result.minimum_steel_area_mm2);
            println!(
                "  As,req  = {:.1} mm²  (governed by {:?})",
                result.required_steel_area_mm2, result.governing
            );
            println!();
            println!("Ductility & Capacity:");
            match code {
                CodeVariant::Aci => {
                    println!("  c  = {:.2} mm", result.neutral_axis_depth_mm);
                    println!("  εs = {:.5}", result.steel_strain.unwrap_or(0.0));
                    println!("  φ  = {:.3}", result.phi.unwrap_or(0.0));
                }
                CodeVariant::Ecp => {
                    println!("  C1  = {:.3}", result.c1.unwrap_or(0.0));
                    println!("  J   = {:.3}", result.j.unwrap_or(0.0));
                    println!("  x/d = {:.3}", result.depth_ratio.unwrap_or(0.0));
                }
            }
            println!("  Class:    {}", result.classification);
            println!(
                "  Capacity: {:.2} kN.m {}",
                result.moment_capacity_knm,
                status_icon(result.moment_capacity_knm >= mu)
            );
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  RESULT: {}",
                if result.is_safe { "SAFE" } else { "UNSAFE" }
            );
            println!("═══════════════════════════════════════");

            print_rebar_options(&input, code, result.required_steel_area_mm2);

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn print_rebar_options(input: &FlexureInput, code: CodeVariant, required_mm2: f64) {
    let options = match options_for(required_mm2, &input.geometry) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Rebar selection unavailable: {}", e);
            return;
        }
    };

    println!();
    println!("Candidate bar arrangements (required {:.1} mm²):", required_mm2);
    println!("  Bars     Provided   Excess   Spacing    Capacity");
    for option in options {
        let spacing = option
            .clear_spacing_mm
            .map(|s| format!("{:.1} mm", s))
            .unwrap_or_else(|| "-".to_string());

        let capacity = match verify_provided_steel(input, code, option.provided_area_mm2) {
            Ok(check) => format!(
                "{:.1} kN.m {}",
                check.moment_capacity_knm,
                status_icon(check.is_safe)
            ),
            Err(e) => format!("({})", e.error_code()),
        };

        println!(
            "  {:<8} {:>6.0} mm² {:>6.1}%  {:>9} {}  {}",
            option.display_name(),
            option.provided_area_mm2,
            option.excess_percent,
            spacing,
            status_icon(option.spacing_ok),
            capacity
        );
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}
