//! Output formatting for habitability reports.

use clap::ValueEnum;

use habzone_lib::{HabitabilityReport, HzLimit};

/// Supported output formats for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report.
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// Render a habitability report as the sequential text layout: object flux,
/// boundaries as AU distances, boundaries as flux values, classification.
pub fn format_report_text(report: &HabitabilityReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("This object's Seff: {}\n", report.object_flux));
    out.push_str("\n*** This system's HZ stats: ***\n");

    out.push_str("\n DISTANCES IN AU\n\n");
    for limit in HzLimit::ALL {
        out.push_str(&format!(
            "{} (1 Me): {}\n",
            limit.label(),
            report.boundary_distances_au.distance_for(limit)
        ));
    }

    out.push_str("\n STELLAR FLUX (EFFECTIVE)\n\n");
    for limit in HzLimit::ALL {
        out.push_str(&format!(
            "{} (1 Me): {}\n",
            limit.label(),
            report.boundaries.flux_for(limit)
        ));
    }

    out.push_str(&format!("\n{}\n", report.classification.description()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use habzone_lib::{assess_habitability, OrbitalParameters, StellarParameters};

    fn solar_report() -> HabitabilityReport {
        let star = StellarParameters {
            luminosity_lsun: 1.0,
            effective_temp_k: 5780.0,
        };
        let orbit = OrbitalParameters {
            semi_major_axis_au: 1.0,
        };
        assess_habitability(&star, &orbit).expect("valid inputs")
    }

    #[test]
    fn text_report_has_sections_in_order() {
        let text = format_report_text(&solar_report());

        let flux_pos = text.find("This object's Seff: 1").expect("flux line");
        let au_pos = text.find("DISTANCES IN AU").expect("AU header");
        let seff_pos = text.find("STELLAR FLUX (EFFECTIVE)").expect("flux header");
        let class_pos = text
            .find("Conservative Habitable Zone")
            .expect("classification");

        assert!(flux_pos < au_pos);
        assert!(au_pos < seff_pos);
        assert!(seff_pos < class_pos);
    }

    #[test]
    fn text_report_lists_all_four_limits_in_both_sections() {
        let text = format_report_text(&solar_report());
        for label in [
            "Recent Venus",
            "Runaway Greenhouse",
            "Maximum Greenhouse",
            "Early Mars",
        ] {
            // Once in the AU section and once in the flux section; the
            // classification sentence may name a limit again.
            assert!(text.matches(label).count() >= 2, "label {}", label);
        }
    }

    #[test]
    fn text_report_always_ends_with_a_classification() {
        let star = StellarParameters {
            luminosity_lsun: 1.0,
            effective_temp_k: 5780.0,
        };
        // Closer than the Recent Venus limit: reported explicitly as too hot.
        let orbit = OrbitalParameters {
            semi_major_axis_au: 0.5,
        };
        let report = assess_habitability(&star, &orbit).expect("valid inputs");

        let text = format_report_text(&report);
        assert!(text.contains("NOT in the Habitable Zone (Closer than Recent Venus)"));
    }
}
