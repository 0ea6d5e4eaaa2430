//! Per-type reference data.

use crate::enums::EacType;

/// Reference data for one certificate type: the conventional primary unit,
/// registry subtypes commonly seen in `type2`, and technology labels
/// commonly seen in `production_tech`.
///
/// This is reference material, not validation: unknown values answer
/// `false`, never an error, because registries add subtypes and
/// technologies faster than any static table tracks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EacTypeSettings {
    pub eac_type: EacType,
    /// Conventional primary measurement unit.
    pub primary_unit: &'static str,
    /// Known registry subtypes.
    pub subtypes: &'static [&'static str],
    /// Known technology/feedstock labels.
    pub technologies: &'static [&'static str],
}

const REC: EacTypeSettings = EacTypeSettings {
    eac_type: EacType::Rec,
    primary_unit: "MWh",
    subtypes: &["GO", "I-REC", "REGO"],
    technologies: &["WIND", "SOLAR", "HYDRO", "GEOTHERMAL", "BIOMASS"],
};

const RTC: EacTypeSettings = EacTypeSettings {
    eac_type: EacType::Rtc,
    primary_unit: "MMBtu",
    subtypes: &["M-RETS"],
    technologies: &["SOLAR_THERMAL", "GEOTHERMAL", "BIOMASS"],
};

const RNG: EacTypeSettings = EacTypeSettings {
    eac_type: EacType::Rng,
    primary_unit: "MMBtu",
    subtypes: &[],
    technologies: &["LANDFILL", "DAIRY", "WASTEWATER", "FOOD_WASTE"],
};

const SAF: EacTypeSettings = EacTypeSettings {
    eac_type: EacType::Saf,
    primary_unit: "L",
    subtypes: &["SAFC"],
    technologies: &["HEFA", "FT", "ATJ"],
};

const CC: EacTypeSettings = EacTypeSettings {
    eac_type: EacType::Cc,
    primary_unit: "tCO2e",
    subtypes: &["VCU", "CER"],
    technologies: &["FORESTRY", "SOIL_CARBON", "DAC", "BIOCHAR"],
};

impl EacTypeSettings {
    /// Reference entry for a certificate type.
    pub fn for_type(eac_type: EacType) -> &'static EacTypeSettings {
        match eac_type {
            EacType::Rec => &REC,
            EacType::Rtc => &RTC,
            EacType::Rng => &RNG,
            EacType::Saf => &SAF,
            EacType::Cc => &CC,
        }
    }

    /// Whether a `type2` value appears in the known subtypes.
    pub fn is_known_subtype(&self, type2: &str) -> bool {
        self.subtypes.iter().any(|subtype| *subtype == type2)
    }

    /// Whether a `production_tech` value appears in the known technologies.
    pub fn is_known_technology(&self, technology: &str) -> bool {
        self.technologies.iter().any(|tech| *tech == technology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_an_entry_with_a_unit() {
        for eac_type in EacType::ALL {
            let settings = EacTypeSettings::for_type(eac_type);
            assert_eq!(settings.eac_type, eac_type);
            assert!(!settings.primary_unit.is_empty());
        }
    }

    #[test]
    fn rec_settings_match_registry_conventions() {
        let settings = EacTypeSettings::for_type(EacType::Rec);
        assert_eq!(settings.primary_unit, "MWh");
        assert!(settings.is_known_subtype("GO"));
        assert!(settings.is_known_subtype("I-REC"));
        assert!(settings.is_known_technology("WIND"));
    }

    #[test]
    fn unknown_values_answer_false() {
        let settings = EacTypeSettings::for_type(EacType::Cc);
        assert!(!settings.is_known_subtype("GO"));
        assert!(!settings.is_known_technology("WIND"));
    }
}
