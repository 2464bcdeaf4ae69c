use chrono_tz::Tz;

/// A city the location-aware tools know about.
pub struct City {
    pub name: &'static str,
    aliases: &'static [&'static str],
    pub weather: &'static str,
    pub timezone: Tz,
}

static CITIES: &[City] = &[
    City {
        name: "San Francisco",
        aliases: &["san francisco", "sf"],
        weather: "It's 60 degrees and foggy.",
        timezone: chrono_tz::America::Los_Angeles,
    },
    City {
        name: "New York",
        aliases: &["new york", "nyc"],
        weather: "It's 45 degrees and cloudy.",
        timezone: chrono_tz::America::New_York,
    },
    City {
        name: "London",
        aliases: &["london"],
        weather: "It's 52 degrees and rainy.",
        timezone: chrono_tz::Europe::London,
    },
    City {
        name: "Paris",
        aliases: &["paris"],
        weather: "It's 58 degrees and partly cloudy.",
        timezone: chrono_tz::Europe::Paris,
    },
    City {
        name: "Tokyo",
        aliases: &["tokyo"],
        weather: "It's 68 degrees and clear.",
        timezone: chrono_tz::Asia::Tokyo,
    },
];

/// Finds the city mentioned in a free-form query.
///
/// Matching is case-insensitive and works on whole words, so "sf" matches
/// "Weather in SF?" but not "transfer".
pub fn find(query: &str) -> Option<&'static City> {
    let words: Vec<String> = query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    let normalized = format!(" {} ", words.join(" "));

    CITIES.iter().find(|city| {
        city.aliases
            .iter()
            .any(|alias| normalized.contains(&format!(" {alias} ")))
    })
}
