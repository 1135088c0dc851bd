use super::html::{bullet_list, icon, page_hero};
use crate::types::Icon;

const SPORTS: [(&str, &[&str]); 3] = [
    ("Outdoor Sports", &["Cricket", "Football", "Volleyball", "Athletics", "Kabaddi"]),
    ("Indoor Sports", &["Chess", "Table Tennis", "Badminton", "Carrom", "Indoor Games"]),
    ("Martial Arts", &["Karate", "Judo", "Yoga", "Self-defense", "Physical Fitness"]),
];

const ARTS: [(Icon, &str, &[&str]); 2] = [
    (
        Icon::Palette,
        "Visual Arts",
        &["Drawing & Painting", "Calligraphy", "Craft Work", "Poster Making"],
    ),
    (
        Icon::Music,
        "Performing Arts",
        &["Music & Singing", "Dance", "Drama & Theatre", "Recitation"],
    ),
];

const CLUBS: [(Icon, &str, &str); 6] = [
    (Icon::FlaskConical, "Science Club", "Experiments & Projects"),
    (Icon::Palette, "Literary Club", "Reading & Writing"),
    (Icon::Music, "Debate Society", "Public Speaking"),
    (Icon::Trophy, "Environment Club", "Eco Activities"),
    (Icon::FlaskConical, "Quiz Club", "General Knowledge"),
    (Icon::Palette, "Tech Club", "Coding & Robotics"),
];

const EVENTS: [(&str, &str, &str); 4] = [
    ("Annual Sports Day", "November", "Inter-house sports competitions and athletic meets"),
    ("Science Exhibition", "February", "Student projects and scientific demonstrations"),
    ("Annual Day", "March", "Cultural programs and prize distribution"),
    ("Independence Day", "August", "Patriotic celebrations and cultural programs"),
];

pub fn render() -> String {
    let sports: String = SPORTS
        .iter()
        .map(|(title, items)| {
            format!(
                r#"<div class="card">{}<h3>{title}</h3>{}</div>"#,
                icon(Icon::Trophy),
                bullet_list(items)
            )
        })
        .collect();

    let arts: String = ARTS
        .iter()
        .map(|(i, title, items)| {
            format!(
                r#"<div class="card">{}<h3>{title}</h3>{}</div>"#,
                icon(*i),
                bullet_list(items)
            )
        })
        .collect();

    let clubs: String = CLUBS
        .iter()
        .map(|(i, name, desc)| {
            format!(
                r#"<div class="card" style="text-align:center;">{}<h3>{name}</h3><p class="muted">{desc}</p></div>"#,
                icon(*i)
            )
        })
        .collect();

    let events: String = EVENTS
        .iter()
        .map(|(event, month, desc)| {
            format!(
                r#"<div class="card row"><span class="badge">{month}</span><div><h3>{event}</h3><p class="muted">{desc}</p></div></div>"#
            )
        })
        .collect();

    format!(
        r#"{hero}
<section>
    <h2>Sports &amp; Physical Education</h2>
    <p class="muted" style="text-align:center;margin-bottom:24px;">We believe in the holistic development of students through sports and physical activities</p>
    <div class="grid">{sports}</div>
</section>
<section>
    <h2>Arts &amp; Cultural Activities</h2>
    <div class="grid">{arts}</div>
</section>
<section>
    <h2>Clubs &amp; Societies</h2>
    <div class="grid">{clubs}</div>
</section>
<section>
    <h2>Annual Events</h2>
    <div class="stack">{events}</div>
</section>"#,
        hero = page_hero("Co-curricular Activities", "Nurturing talents beyond academics"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_sections() {
        let html = render();
        assert!(html.contains("Co-curricular Activities"));
        assert!(html.contains("<li>Kabaddi</li>"));
        assert!(html.contains("<li>Drama &amp; Theatre</li>"));
        assert_eq!(html.matches(r#"<span class="badge">"#).count(), 4);
    }
}
