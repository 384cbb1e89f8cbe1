#[cfg(test)]
pub const POST_DATA_MD: &str = "id: hello
title: Hello, world
date: 2022-05-01 14:30

# Hello

This is ~~not~~ a *test*.
";

#[cfg(test)]
pub const POST_DATA_FENCED: &str = "---
id: fenced
title: A title
  that goes on
date: 2022-05-02 09:00
---

Body.
";

#[cfg(test)]
pub const POST_DATA_NO_DATE: &str = "id: nodate
title: Where is the date?

Some text.
";

#[cfg(test)]
pub const POST_DATA_DUP_KEYS: &str = "id: first
title: The first title
id: second
date: 2022-05-01 14:30
title: The second title
date: 1999-01-01 00:00

Body text.
";

#[cfg(test)]
pub fn create_post(id: &str) -> crate::post::Post {
    use chrono::{NaiveDate, NaiveTime};

    let date = chrono::NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        NaiveTime::from_hms_opt(5, 6, 7).unwrap(),
    );
    crate::post::Post {
        file_name: std::path::PathBuf::from(format!("post-{}.md", id)),
        id: id.to_string(),
        title: format!("title-of-post-{}", id),
        date,
        date_display: "2024-01-02".to_string(),
        date_feed: Some("Tue, 02 Jan 2024 05:06:07 GMT".to_string()),
        body: format!("<p>body-of-post-{}</p>", id),
    }
}
