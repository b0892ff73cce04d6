use folio::motion::MotionLevel;
use folio::prelude::*;

#[test]
fn bundled_profile_feeds_every_section() {
    let profile = Profile::load().expect("bundled profile");

    assert_eq!(profile.personal.title, "Front-End Web Developer");
    assert_eq!(profile.experience[0].company, "HackHunt Cybersecure LLP");
    assert_eq!(profile.training.len(), 1);
    assert_eq!(profile.skills.groups()[0].0, "Languages");
    assert!(profile.project_tech().contains(&"GSAP"));
    assert_eq!(
        profile.education[0].score.as_deref(),
        Some("CGPA: 7.49")
    );
}

#[test]
fn summary_renders_as_paragraphs() {
    let profile = Profile::load().expect("bundled profile");
    let html = profile.summary_html();
    assert_eq!(html.matches("<p>").count(), 2);
    assert!(html.contains("<strong>Frontend Developer</strong>"));
}

#[test]
fn contact_section_lists_channels_and_socials() {
    let profile = Profile::load().expect("bundled profile");
    let channels = profile.personal.contact_channels();
    assert_eq!(
        channels
            .iter()
            .map(|channel| channel.label)
            .collect::<Vec<_>>(),
        ["Email", "Phone", "Location"]
    );
    assert_eq!(
        channels[0].link.as_deref(),
        Some("mailto:suraj802119@gmail.com")
    );

    let socials = profile.personal.social_links();
    assert_eq!(socials.len(), 2);
    assert!(socials[0].url.starts_with("https://www.linkedin.com/"));
}

#[test]
fn placeholder_project_links_are_not_rendered() {
    let profile = Profile::load().expect("bundled profile");
    assert!(
        profile
            .projects
            .iter()
            .all(|project| project.github_url().is_none() && project.live_url().is_none())
    );
}

#[test]
fn every_section_has_a_reveal() {
    for section in Section::ALL {
        let reveal = section
            .body_reveal()
            .reveal()
            .with_level(MotionLevel::Full);
        assert!(reveal.duration_ms > 0, "{section} should animate");
    }
}
