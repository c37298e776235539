#[cfg(test)]
use crate::features::donations::models::{Donation, DonationCategory, NewDonation};

#[cfg(test)]
use chrono::{Duration, NaiveDate, Utc};

#[cfg(test)]
use fake::{
    faker::{address::en::StreetName, company::en::CompanyName, phone_number::en::PhoneNumber},
    Fake,
};

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[cfg(test)]
pub fn new_donation(donor: &str, category: DonationCategory, expiry_date: NaiveDate) -> NewDonation {
    NewDonation {
        donor: donor.to_string(),
        contact: PhoneNumber().fake(),
        category,
        food_item: format!("{} meal", category),
        quantity: (1..50).fake(),
        expiry_date,
        location: StreetName().fake(),
        latitude: None,
        longitude: None,
    }
}

#[cfg(test)]
pub fn donation_from(donor: &str, category: DonationCategory, expiry_date: NaiveDate) -> Donation {
    new_donation(donor, category, expiry_date).into_donation(Uuid::now_v7(), Utc::now())
}

/// `count` available donations cycling through the categories, expiring over five days
#[cfg(test)]
pub fn sample_donations(count: usize) -> Vec<Donation> {
    (0..count)
        .map(|i| {
            let donor: String = CompanyName().fake();
            let category = DonationCategory::ALL[i % DonationCategory::ALL.len()];
            let expiry = date(2024, 1, 1) + Duration::days((i % 5) as i64);
            donation_from(&donor, category, expiry)
        })
        .collect()
}
