use crate::catalog::Family;
use crate::config::Region;

/// Family tag used in product keys. Sibling variants share one tag.
pub fn product_tag(family: Family, region: Region) -> String {
    let tag = match family {
        Family::Pro2x2 | Family::Lite2x2 => "InfiLINK 2x2",
        Family::Xg500 => "InfiLINK XG",
        other => other.into(),
    };
    if region == Region::Rus && family.is_quanta() {
        tag.replace("Quanta", "Vector")
    } else {
        tag.to_string()
    }
}

/// Model code as sold in the configured region.
pub fn regional_model(family: Family, model: &str, region: Region) -> String {
    match model.strip_prefix('Q') {
        Some(rest) if region == Region::Rus && family.is_quanta() => format!("V{}", rest),
        _ => model.to_string(),
    }
}

/// `{tag}#{model}`
pub fn product_key(family: Family, model: &str, region: Region) -> String {
    format!(
        "{}#{}",
        product_tag(family, region),
        regional_model(family, model, region)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pro_and_lite_share_a_tag() {
        assert_eq!(
            product_tag(Family::Pro2x2, Region::Worldwide),
            product_tag(Family::Lite2x2, Region::Worldwide)
        );
        assert_eq!(
            product_key(Family::Pro2x2, "R5000-Pro", Region::Worldwide),
            "InfiLINK 2x2#R5000-Pro"
        );
    }

    #[test]
    fn xg_500_folds_into_xg() {
        assert_eq!(product_tag(Family::Xg500, Region::Worldwide), "InfiLINK XG");
        assert_eq!(product_tag(Family::Xg1000, Region::Worldwide), "InfiLINK XG 1000");
    }

    #[test]
    fn regional_rename_applies_to_quanta_only() {
        assert_eq!(
            product_key(Family::Quanta5, "Q5-E", Region::Rus),
            "Vector 5#V5-E"
        );
        assert_eq!(
            product_key(Family::Quanta5, "Q5-E", Region::Worldwide),
            "Quanta 5#Q5-E"
        );
        assert_eq!(
            product_key(Family::Evolution, "QE5000", Region::Rus),
            "InfiLINK Evolution#QE5000"
        );
        // Only the leading letter is swapped.
        assert_eq!(regional_model(Family::Quanta70, "Q70-QX", Region::Rus), "V70-QX");
    }
}
