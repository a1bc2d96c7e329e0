use super::entities::{
    Platform, PortfolioData, Project, Rating, Review, Service, Skill, SkillLevel, SocialLink,
};

/// Built-in content used when nothing has been persisted yet, or when the
/// persisted blob cannot be read.
impl Default for PortfolioData {
    fn default() -> Self {
        Self {
            name: "Rafid Studio".to_string(),
            role: "Lead UI & UX Designer".to_string(),
            bio: "With a passion for clean, intuitive, and effective design, I create digital \
                  products that enhance user engagement."
                .to_string(),
            hero_image: "https://picsum.photos/seed/designer/800/1000".to_string(),
            hero_main_text: "Designer".to_string(),
            hero_sub_text: "UI & UX".to_string(),
            about_image: "https://picsum.photos/seed/creative/800/800".to_string(),
            about_title: "Passionate Designer with a Creative Edge".to_string(),
            about_subtitle: "About Me".to_string(),
            about_description: "I help brands turn their visions into stunning digital \
                                experiences. My approach combines psychological insights with \
                                pixel-perfect aesthetics."
                .to_string(),
            services_title: "What I Can Do For You".to_string(),
            services_subtitle: "My Services".to_string(),
            portfolio_title: "Latest Creative Projects".to_string(),
            portfolio_subtitle: "Portfolio".to_string(),
            contact_title: "Let's Create Something Great Together".to_string(),
            contact_subtitle: "Contact Me".to_string(),
            reviews_title: "What Clients Say".to_string(),
            reviews_subtitle: "Testimonials".to_string(),
            email: "hello@rafid.studio".to_string(),
            location: "San Francisco, CA".to_string(),
            cv_url: "#".to_string(),
            project_categories: vec![
                "UI/UX Design".to_string(),
                "Website Design".to_string(),
                "App Design".to_string(),
                "Graphic Design".to_string(),
            ],
            skills: vec![
                Skill {
                    id: "1".to_string(),
                    name: "UI/UX Design".to_string(),
                    level: SkillLevel::new(95),
                },
                Skill {
                    id: "2".to_string(),
                    name: "Website Design".to_string(),
                    level: SkillLevel::new(88),
                },
            ],
            services: vec![Service {
                id: "1".to_string(),
                title: "UI/UX Design".to_string(),
                description: "User-centered designs that are visually engaging.".to_string(),
                icon_name: "Layout".to_string(),
                long_description: None,
            }],
            projects: vec![Project {
                id: "1".to_string(),
                title: "Fintech Mobile App".to_string(),
                category: "App Design".to_string(),
                image_url: "https://picsum.photos/seed/fintech/600/400".to_string(),
                video_url: None,
                link: "#".to_string(),
            }],
            socials: vec![
                SocialLink {
                    id: "1".to_string(),
                    platform: Platform::Twitter,
                    url: "https://twitter.com".to_string(),
                },
                SocialLink {
                    id: "2".to_string(),
                    platform: Platform::Github,
                    url: "https://github.com".to_string(),
                },
            ],
            messages: vec![],
            reviews: vec![
                Review {
                    id: "r1".to_string(),
                    client_name: "Sarah Jenkins".to_string(),
                    client_role: "CEO at TechFlow".to_string(),
                    content: "Rafid Studio transformed our brand identity into something truly \
                              futuristic. The attention to detail is unmatched."
                        .to_string(),
                    rating: Rating::from(5),
                    date: "2024-03-15".to_string(),
                    is_approved: true,
                },
                Review {
                    id: "r2".to_string(),
                    client_name: "Michael Chen".to_string(),
                    client_role: "Product Manager".to_string(),
                    content: "The UI/UX work exceeded our expectations. Clean, modern, and \
                              highly functional. Highly recommended!"
                        .to_string(),
                    rating: Rating::from(5),
                    date: "2024-04-02".to_string(),
                    is_approved: true,
                },
            ],
        }
    }
}
