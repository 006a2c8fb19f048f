// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobharvest::domain::models::source::SourceId;
use jobharvest::infrastructure::sources::bayt::Bayt;
use jobharvest::infrastructure::sources::expatriates::Expatriates;
use jobharvest::infrastructure::sources::gulftalent::GulfTalent;
use jobharvest::infrastructure::sources::mourjan::Mourjan;
use jobharvest::infrastructure::sources::naukrigulf::NaukriGulf;
use jobharvest::infrastructure::sources::SourceProfile;

#[test]
fn every_profile_serves_its_source() {
    let profiles: Vec<Box<dyn SourceProfile>> = vec![
        Box::new(Expatriates::default()),
        Box::new(Mourjan),
        Box::new(Bayt),
        Box::new(NaukriGulf),
        Box::new(GulfTalent),
    ];

    for (profile, source) in profiles.iter().zip(SourceId::ALL) {
        assert_eq!(profile.source(), source);
        for unit in profile.page_plan().units() {
            let url = profile.url_for(&unit);
            assert_eq!(SourceId::resolve(&url), Some(source), "{url}");
        }
    }
}

#[test]
fn only_naukrigulf_needs_stealth() {
    assert!(NaukriGulf.stealth());
    assert!(!Bayt.stealth());
    assert!(!Mourjan.stealth());
    assert!(!GulfTalent.stealth());
    assert!(!Expatriates::default().stealth());
}
