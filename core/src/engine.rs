use crate::aggregation::{mean, median, round2};
use crate::catalog::Commune;
use crate::context::DataContext;
use crate::datasets::{PropertyKind, RentKind};
use crate::string_normalization::CityKey;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Outcome of a housing lookup. Missing data is a value, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Estimate {
    Available(f64),
    /// No row matches the city
    Unavailable,
    /// Rows match but none carried a usable number
    NonNumeric,
}

impl Estimate {
    pub fn value(&self) -> Option<f64> {
        match self {
            Estimate::Available(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Estimate::Available(_))
    }

    fn from_aggregate(aggregate: Option<f64>, rejected: usize) -> Self {
        match aggregate {
            Some(value) => Estimate::Available(round2(value)),
            None if rejected > 0 => Estimate::NonNumeric,
            None => Estimate::Unavailable,
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Available(value) => write!(f, "{value:.2}"),
            Estimate::Unavailable => f.write_str("Non disponible"),
            Estimate::NonNumeric => f.write_str("Non numérique"),
        }
    }
}

/// Housing panel for one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousingProfile {
    pub city: String,
    pub key: CityKey,
    pub commune: Option<Commune>,
    pub houses_rent: Estimate,
    pub apartments_rent: Estimate,
    pub small_apartments_rent: Estimate,
    pub large_apartments_rent: Estimate,
    pub apartment_sale_price: Estimate,
    pub house_sale_price: Estimate,
}

impl HousingProfile {
    pub fn rent(&self, kind: RentKind) -> Estimate {
        match kind {
            RentKind::Houses => self.houses_rent,
            RentKind::Apartments => self.apartments_rent,
            RentKind::SmallApartments => self.small_apartments_rent,
            RentKind::LargeApartments => self.large_apartments_rent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first: HousingProfile,
    pub second: HousingProfile,
}

/// Read-only lookups over a loaded [`DataContext`].
#[derive(Debug)]
pub struct LookupEngine {
    context: DataContext,
}

impl LookupEngine {
    pub fn new(context: DataContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &DataContext {
        &self.context
    }

    /// Mean predicted rent per m², rounded to cents.
    pub fn rent_estimate(&self, kind: RentKind, city: &str) -> Estimate {
        let key = CityKey::new(city);
        let Some(dataset) = self.context.rent_table(kind) else {
            return Estimate::Unavailable;
        };

        let values: Vec<f64> = dataset
            .rows_for_key(&key)
            .iter()
            .map(|row| row.value)
            .collect();
        let estimate = Estimate::from_aggregate(mean(&values), dataset.rejected_for_key(&key));

        debug!(%key, kind = kind.as_str(), rows = values.len(), %estimate, "rent lookup");
        estimate
    }

    /// Median apartment sale price per m².
    pub fn sale_price_per_area(&self, city: &str) -> Estimate {
        self.sale_price_per_area_of(city, PropertyKind::Apartment)
    }

    pub fn sale_price_per_area_of(&self, city: &str, kind: PropertyKind) -> Estimate {
        let key = CityKey::new(city);
        let registry = self.context.registry();

        let prices: Vec<f64> = registry
            .rows_of_kind(&key, kind)
            .map(|row| row.price_per_area)
            .collect();
        let count = prices.len();
        let estimate = Estimate::from_aggregate(median(prices), registry.rejected_for(&key, kind));

        debug!(%key, kind = kind.registry_label(), rows = count, %estimate, "sale price lookup");
        estimate
    }

    pub fn housing_profile(&self, city: &str) -> HousingProfile {
        let key = CityKey::new(city);

        HousingProfile {
            city: city.to_string(),
            commune: self.context.catalog().find_by_key(&key).cloned(),
            key,
            houses_rent: self.rent_estimate(RentKind::Houses, city),
            apartments_rent: self.rent_estimate(RentKind::Apartments, city),
            small_apartments_rent: self.rent_estimate(RentKind::SmallApartments, city),
            large_apartments_rent: self.rent_estimate(RentKind::LargeApartments, city),
            apartment_sale_price: self.sale_price_per_area_of(city, PropertyKind::Apartment),
            house_sale_price: self.sale_price_per_area_of(city, PropertyKind::House),
        }
    }

    pub fn compare(&self, first_city: &str, second_city: &str) -> Comparison {
        Comparison {
            first: self.housing_profile(first_city),
            second: self.housing_profile(second_city),
        }
    }
}
