use chrono::Utc;

/// Timestamp-derived id that does not collide with any of `existing`.
pub fn next_id<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    next_id_from(Utc::now().timestamp_millis(), existing)
}

pub fn next_id_from<'a, I>(millis: i64, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = existing.into_iter().collect();
    let mut candidate = millis;
    loop {
        let id = candidate.to_string();
        if !taken.contains(&id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}
