use super::html::{bullet_list, icon, page_hero};
use crate::types::Icon;

const FACILITIES: [(Icon, &str, &str); 6] = [
    (
        Icon::Building,
        "Spacious Classrooms",
        "Well-ventilated and furnished classrooms with modern teaching aids and comfortable seating arrangements for effective learning.",
    ),
    (
        Icon::FlaskConical,
        "Science Laboratories",
        "Fully equipped Physics, Chemistry, and Biology labs with latest instruments and safety equipment for practical learning.",
    ),
    (
        Icon::Laptop,
        "Computer Lab",
        "Modern computer lab with 50+ systems, high-speed internet, and latest software for digital literacy.",
    ),
    (
        Icon::BookOpen,
        "Library",
        "Well-stocked library with 10,000+ books, journals, magazines, and digital resources for comprehensive learning.",
    ),
    (
        Icon::Activity,
        "Sports Complex",
        "Large playground, indoor sports facility, basketball court, and dedicated spaces for various sports activities.",
    ),
    (
        Icon::Bus,
        "Transport Facility",
        "Safe and reliable bus service covering major areas of Ganderbal with GPS tracking and trained drivers.",
    ),
];

const LABS: [(&str, &[&str]); 3] = [
    ("Physics Lab", &["Modern equipment", "Safety measures", "30+ experiments"]),
    ("Chemistry Lab", &["Quality chemicals", "Safety equipment", "Practical sessions"]),
    ("Biology Lab", &["Microscopes", "Specimens", "Models & charts"]),
];

const CLASSROOM_STATS: [(&str, &str); 4] = [
    ("50+", "Classrooms"),
    ("30", "Smart Boards"),
    ("100%", "AC Classrooms"),
    ("40", "Students/Class"),
];

const LIBRARY_STATS: [(&str, &str); 4] = [
    ("10,000+", "Books"),
    ("50+", "Magazines"),
    ("100+", "Seating Capacity"),
    ("Yes", "E-Library"),
];

const SAFETY: [(&str, &str); 4] = [
    ("CCTV Surveillance", "24/7 CCTV monitoring across campus for student safety and security."),
    ("Medical Facilities", "First aid room with trained staff and tie-up with nearby hospital."),
    ("Fire Safety", "Fire extinguishers, emergency exits, and regular safety drills."),
    ("Secure Transport", "GPS-enabled buses with trained drivers and female attendants."),
];

fn stat_block(stats: &[(&str, &str)]) -> String {
    let cells: String = stats
        .iter()
        .map(|(value, label)| format!("<div><strong>{value}</strong><span>{label}</span></div>"))
        .collect();
    format!(r#"<div class="stats">{cells}</div>"#)
}

pub fn render() -> String {
    let facilities: String = FACILITIES
        .iter()
        .map(|(i, title, desc)| {
            format!(
                r#"<div class="card">{}<h3>{title}</h3><p class="muted">{desc}</p></div>"#,
                icon(*i)
            )
        })
        .collect();

    let labs: String = LABS
        .iter()
        .map(|(title, items)| format!(r#"<div class="card"><h3>{title}</h3>{}</div>"#, bullet_list(items)))
        .collect();

    let safety: String = SAFETY
        .iter()
        .map(|(title, desc)| format!(r#"<div class="card"><h3>{title}</h3><p class="muted">{desc}</p></div>"#))
        .collect();

    format!(
        r#"{hero}
<section>
    <div class="grid">{facilities}</div>
</section>
<section>
    <h2>Laboratories</h2>
    <div class="grid">{labs}</div>
</section>
<section>
    <h2>Smart Classrooms</h2>
    <p class="muted" style="margin-bottom:24px;">Our smart classrooms are equipped with digital boards, projectors, and multimedia content to make learning more interactive and engaging. Each classroom is designed to accommodate 40 students comfortably with proper lighting and ventilation.</p>
    {classrooms}
</section>
<section>
    <h2>Library</h2>
    <p class="muted" style="margin-bottom:24px;">Our library is the heart of academic excellence, housing a vast collection of books, reference materials, magazines, and digital resources. Students have access to a peaceful reading environment with dedicated study areas.</p>
    {library}
</section>
<section>
    <h2>Safety &amp; Security</h2>
    <div class="grid">{safety}</div>
</section>"#,
        hero = page_hero(
            "Infrastructure & Facilities",
            "Modern amenities for a complete learning experience"
        ),
        classrooms = stat_block(&CLASSROOM_STATS),
        library = stat_block(&LIBRARY_STATS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_sections() {
        let html = render();
        assert!(html.contains("Infrastructure &amp; Facilities"));
        assert!(html.contains("<strong>10,000+</strong><span>Books</span>"));
        assert!(html.contains("icon-flask-conical"));
        assert!(html.contains("Secure Transport"));
    }
}
