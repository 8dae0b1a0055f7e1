//! Fixed copy shown on the page.

pub const BRAND: &str = "Julian Goldie";

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
    pub stars: u8,
}

impl Testimonial {
    /// "Role at Company"
    pub fn byline(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }
}

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

pub struct Benefit {
    /// Emoji shown above the title.
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "E-commerce Director",
        company: "StyleHub",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=150&q=80",
        quote: "The SEO calculator helped us plan our budget effectively. We've seen a 300% increase in organic traffic since working with Julian.",
        stars: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Marketing Manager",
        company: "TechFlow",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-1.2.1&auto=format&fit=crop&w=150&q=80",
        quote: "Julian's SEO expertise transformed our online presence. Our conversion rate has doubled in just 6 months.",
        stars: 5,
    },
    Testimonial {
        name: "Emma Davis",
        role: "CEO",
        company: "GrowthWise",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&auto=format&fit=crop&w=150&q=80",
        quote: "The most valuable investment we've made. Our ROI has been phenomenal since implementing Julian's SEO strategies.",
        stars: 5,
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic SEO",
        price: "$1,000/mo",
        features: &[
            "5 Target Keywords",
            "Monthly Reporting",
            "Basic On-Page SEO",
            "Content Optimization",
            "Technical SEO Audit",
        ],
    },
    Plan {
        name: "Professional SEO",
        price: "$2,500/mo",
        features: &[
            "15 Target Keywords",
            "Weekly Reporting",
            "Advanced On-Page SEO",
            "Content Strategy",
            "Link Building",
            "Local SEO",
            "Competitor Analysis",
        ],
    },
    Plan {
        name: "Enterprise SEO",
        price: "Custom",
        features: &[
            "Unlimited Keywords",
            "Daily Reporting",
            "Full SEO Suite",
            "Custom Strategy",
            "Priority Support",
            "International SEO",
            "Advanced Analytics",
        ],
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "🎯",
        title: "Targeted Traffic",
        body: "Attract visitors who are actively searching for your products or services.",
    },
    Benefit {
        icon: "🛡️",
        title: "Long-Term Results",
        body: "Build sustainable organic traffic that continues to grow over time.",
    },
    Benefit {
        icon: "🏆",
        title: "Competitive Edge",
        body: "Stay ahead of your competitors in search results and market presence.",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How accurate is the SEO Cost Calculator?",
        answer: "The calculator provides estimates based on industry standards and my experience with hundreds of successful SEO campaigns. Your actual investment may vary based on specific requirements and goals.",
    },
    FaqEntry {
        question: "How long until I see results?",
        answer: "While initial improvements can be seen within 3-6 months, SEO is a long-term investment. Sustainable results typically become evident after 6-12 months of consistent optimization.",
    },
    FaqEntry {
        question: "What's included in the SEO service?",
        answer: "Services include keyword research, on-page optimization, technical SEO, content strategy, link building, and regular performance reporting. Each plan is customized to your specific needs.",
    },
    FaqEntry {
        question: "Do you guarantee rankings?",
        answer: "While we can't guarantee specific rankings due to search engine algorithms, we have a proven track record of improving search visibility and organic traffic for our clients.",
    },
];

pub const QUICK_LINKS: &[&str] = &["Home", "Services", "Case Studies", "Contact"];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn three_testimonials_with_full_ratings() {
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS.iter().all(|t| t.stars == 5));
    }

    #[test]
    fn byline_joins_role_and_company() {
        assert_eq!(TESTIMONIALS[0].byline(), "E-commerce Director at StyleHub");
    }

    #[test]
    fn plans_in_ascending_order() {
        let names: Vec<&str> = PLANS.iter().map(|p| p.name).collect();

        assert_eq!(names, vec!["Basic SEO", "Professional SEO", "Enterprise SEO"]);
        assert_eq!(PLANS[0].features.len(), 5);
        assert_eq!(PLANS[1].features.len(), 7);
        assert_eq!(PLANS[2].features.len(), 7);
    }

    #[test]
    fn faq_has_an_answer_for_every_question() {
        assert_eq!(FAQ.len(), 4);
        assert!(FAQ.iter().all(|f| !f.answer.is_empty()));
    }
}
