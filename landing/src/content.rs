//! The built-in content table.
//!
//! Copy, imagery, prices, and FAQ text for the Tempo AI page. Sections
//! never hardcode copy; everything user-visible routes through here so the
//! table can be swapped from the content pipeline (see
//! [`Content::from_json`](crate::types::Content::from_json)).

use crate::types::{
    BenefitItem, BentoItem, Content, FaqItem, Feature, FeatureHighlight, HeroContent, MarqueeCard,
    PricingPlan, RowDirection, Testimonial,
};

fn s(v: &str) -> String {
    v.to_string()
}

pub fn default_content() -> Content {
    Content {
        name: s("Tempo AI"),
        tagline: s("Smart scheduling powered by AI."),
        cta_label: s("Get Started"),
        hero: HeroContent {
            headline: s("Smart scheduling powered by AI."),
            subtitle: s(
                "Tempo AI learns how you actually work and plans your week around it. \
                 Perfect for deep work, meetings that matter, and a calendar that \
                 finally breathes.",
            ),
            icon: s("/web-logo.svg"),
            device_images: vec![
                s("/device-1.png"),
                s("/device-2.png"),
                s("/device-3.png"),
                s("/device-4.png"),
                s("/device-5.png"),
            ],
        },
        showcase_images: vec![s("/device-6.png"), s("/device-7.png"), s("/device-8.png")],
        features: vec![
            Feature {
                name: s("AI-Powered Scheduling"),
                description: s(
                    "Intelligent scheduling that learns your preferences and optimizes your time.",
                ),
                icon: s("sparkle"),
            },
            Feature {
                name: s("Smart Time Blocking"),
                description: s(
                    "Automatically block time for focused work and personal activities.",
                ),
                icon: s("clock"),
            },
            Feature {
                name: s("Predictive Planning"),
                description: s(
                    "Suggests optimal times for meetings and events based on your habits.",
                ),
                icon: s("calendar"),
            },
            Feature {
                name: s("Cloud Sync"),
                description: s("Access your schedule across all devices in real-time."),
                icon: s("cloud"),
            },
            Feature {
                name: s("Team Coordination"),
                description: s("Easily coordinate schedules with team members and clients."),
                icon: s("users"),
            },
            Feature {
                name: s("Smart Reminders"),
                description: s(
                    "Contextual notifications that adapt to your schedule and priorities.",
                ),
                icon: s("bell"),
            },
        ],
        feature_highlights: vec![
            FeatureHighlight {
                title: s("AI-Powered Scheduling"),
                description: s(
                    "Intelligent scheduling that learns your preferences and optimizes your time.",
                ),
                image: s("/device-2.png"),
                direction: RowDirection::Rtl,
            },
            FeatureHighlight {
                title: s("Smart Time Blocking"),
                description: s(
                    "Automatically block time for focused work and personal activities.",
                ),
                image: s("/device-3.png"),
                direction: RowDirection::Ltr,
            },
            FeatureHighlight {
                title: s("Predictive Planning"),
                description: s(
                    "Suggests optimal times for meetings and events based on your habits.",
                ),
                image: s("/device-4.png"),
                direction: RowDirection::Rtl,
            },
        ],
        bento: vec![
            BentoItem {
                title: s("AI-Powered Scheduling"),
                content: s(
                    "Tempo optimizes your calendar end to end, suggesting the best times \
                     for meetings and tasks based on your preferences and habits.",
                ),
                image: s("/device-1.png"),
                image_alt: s("AI scheduling illustration"),
                full_width: true,
            },
            BentoItem {
                title: s("Smart Time Blocking"),
                content: s(
                    "Automatically blocks out time for focused work, breaks, and personal \
                     activities to keep your schedule balanced and productive.",
                ),
                image: s("/device-2.png"),
                image_alt: s("Time blocking illustration"),
                full_width: false,
            },
            BentoItem {
                title: s("Intelligent Reminders"),
                content: s(
                    "Context-aware notifications that adapt to your schedule, so you never \
                     miss important events or deadlines.",
                ),
                image: s("/device-3.png"),
                image_alt: s("Smart reminders illustration"),
                full_width: false,
            },
            BentoItem {
                title: s("Team Coordination"),
                content: s(
                    "Coordinate schedules with team members and clients, finding optimal \
                     meeting times across time zones.",
                ),
                image: s("/device-4.png"),
                image_alt: s("Team coordination illustration"),
                full_width: true,
            },
        ],
        benefits: vec![
            BenefitItem {
                id: 1,
                text: s("Save hours each week with AI-optimized scheduling."),
                image: s("/device-6.png"),
            },
            BenefitItem {
                id: 2,
                text: s("Reduce scheduling conflicts and double-bookings."),
                image: s("/device-7.png"),
            },
            BenefitItem {
                id: 3,
                text: s("Improve work-life balance with smart time allocation."),
                image: s("/device-8.png"),
            },
            BenefitItem {
                id: 4,
                text: s("Increase productivity with AI-driven time insights."),
                image: s("/device-1.png"),
            },
        ],
        pricing: vec![
            PricingPlan {
                name: s("Basic"),
                price: s("$0"),
                period: s("month"),
                description: s("Perfect for individual users"),
                features: vec![
                    s("AI scheduling (up to 10 events/month)"),
                    s("Basic time blocking"),
                    s("Cloud sync for 1 device"),
                    s("Email reminders"),
                ],
                button_text: s("Start Free"),
                popular: false,
            },
            PricingPlan {
                name: s("Pro"),
                price: s("$12"),
                period: s("month"),
                description: s("Ideal for professionals and small teams"),
                features: vec![
                    s("Unlimited AI scheduling"),
                    s("Advanced time blocking and analysis"),
                    s("Cloud sync for unlimited devices"),
                    s("Smart notifications on every device"),
                    s("Team coordination features"),
                ],
                button_text: s("Upgrade to Pro"),
                popular: true,
            },
        ],
        faqs: vec![
            FaqItem {
                question: s("How does AI improve my scheduling?"),
                answer: s(
                    "Tempo analyzes your scheduling patterns, preferences, and productivity \
                     data to suggest optimal times for tasks and meetings. It learns from \
                     your behavior to continuously improve its recommendations.",
                ),
            },
            FaqItem {
                question: s("Can I integrate Tempo AI with other apps?"),
                answer: s(
                    "Yes. Tempo integrates with popular productivity tools and calendar \
                     apps - sync with Google Calendar, Outlook, and more to centralize \
                     your schedule.",
                ),
            },
            FaqItem {
                question: s("How does team coordination work?"),
                answer: s(
                    "Share availability, schedule group meetings, and coordinate tasks. \
                     Tempo considers everyone's calendar to find the best times for team \
                     activities.",
                ),
            },
            FaqItem {
                question: s("Is my data secure with Tempo AI?"),
                answer: s(
                    "All calendar data is encrypted end to end and stored securely in the \
                     cloud. We never share your personal information or scheduling data \
                     with third parties.",
                ),
            },
            FaqItem {
                question: s("Can I use Tempo AI offline?"),
                answer: s(
                    "You can view your schedule and add events offline. Tempo syncs and \
                     applies AI optimizations when you're back online.",
                ),
            },
        ],
        testimonials: vec![
            Testimonial {
                id: 1,
                text: s(
                    "Tempo has revolutionized how I manage my time. It's like having a \
                     personal assistant.",
                ),
                name: s("Alice Johnson"),
                role: s("Freelance Designer"),
                image: s("/avatars/alice.jpg"),
            },
            Testimonial {
                id: 2,
                text: s(
                    "AI-powered scheduling has significantly reduced conflicts in our \
                     team's calendar.",
                ),
                name: s("Bob Brown"),
                role: s("Project Manager, Tech Innovations"),
                image: s("/avatars/bob.jpg"),
            },
            Testimonial {
                id: 3,
                text: s("Smart time blocking has helped me keep a better work-life balance."),
                name: s("Charlie Davis"),
                role: s("Entrepreneur"),
                image: s("/avatars/charlie.jpg"),
            },
            Testimonial {
                id: 4,
                text: s("Predictive planning has made my workweek so much more efficient."),
                name: s("Diana Evans"),
                role: s("Marketing Director"),
                image: s("/avatars/diana.jpg"),
            },
            Testimonial {
                id: 5,
                text: s("Team coordination has streamlined our project management process."),
                name: s("Ethan Ford"),
                role: s("Software Team Lead"),
                image: s("/avatars/ethan.jpg"),
            },
            Testimonial {
                id: 6,
                text: s("Tempo helps me balance work and personal commitments effortlessly."),
                name: s("Fiona Grant"),
                role: s("HR Manager"),
                image: s("/avatars/fiona.jpg"),
            },
            Testimonial {
                id: 7,
                text: s("The AI-driven insights helped me rebuild my daily routines."),
                name: s("George Harris"),
                role: s("Productivity Coach"),
                image: s("/avatars/george.jpg"),
            },
            Testimonial {
                id: 8,
                text: s("Integration with my other tools created a seamless workflow."),
                name: s("Hannah Irving"),
                role: s("Digital Nomad"),
                image: s("/avatars/hannah.jpg"),
            },
            Testimonial {
                id: 9,
                text: s("Smart reminders have drastically reduced my missed appointments."),
                name: s("Ian Jones"),
                role: s("Sales Executive"),
                image: s("/avatars/ian.jpg"),
            },
            Testimonial {
                id: 10,
                text: s("Tempo's ability to learn my preferences makes planning a breeze."),
                name: s("Julia Kim"),
                role: s("Researcher"),
                image: s("/avatars/julia.jpg"),
            },
            Testimonial {
                id: 11,
                text: s("AI-suggested meeting times improved our team's productivity."),
                name: s("Kevin Lee"),
                role: s("Operations Manager"),
                image: s("/avatars/kevin.jpg"),
            },
            Testimonial {
                id: 12,
                text: s("Travel time estimates made my commute planning much easier."),
                name: s("Laura Martinez"),
                role: s("Urban Planner"),
                image: s("/avatars/laura.jpg"),
            },
        ],
        cta_marquee_a: vec![
            MarqueeCard {
                name: s("Jack"),
                handle: s("@jack"),
                avatar: s("/avatars/jack.jpg"),
                quote: s("I've never seen anything like this before. It's amazing. I love it."),
            },
            MarqueeCard {
                name: s("Jill"),
                handle: s("@jill"),
                avatar: s("/avatars/jill.jpg"),
                quote: s("I don't know what to say. I'm speechless. This is amazing."),
            },
            MarqueeCard {
                name: s("John"),
                handle: s("@john"),
                avatar: s("/avatars/john.jpg"),
                quote: s("I'm at a loss for words. This is amazing. I love it."),
            },
        ],
        cta_marquee_b: vec![
            MarqueeCard {
                name: s("Jane"),
                handle: s("@jane"),
                avatar: s("/avatars/jane.jpg"),
                quote: s("My calendar finally works for me, not against me."),
            },
            MarqueeCard {
                name: s("Jenny"),
                handle: s("@jenny"),
                avatar: s("/avatars/jenny.jpg"),
                quote: s("Set it up in five minutes. Haven't double-booked since."),
            },
            MarqueeCard {
                name: s("James"),
                handle: s("@james"),
                avatar: s("/avatars/james.jpg"),
                quote: s("The best scheduling tool I've used, full stop."),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempo_motion::SIDE_IMAGE_COUNT;

    #[test]
    fn hero_carries_one_image_per_side_slot() {
        let content = default_content();
        assert_eq!(content.hero.device_images.len(), SIDE_IMAGE_COUNT);
    }

    #[test]
    fn bento_has_two_full_width_cards_bracketing_the_pair() {
        let content = default_content();
        assert_eq!(content.bento.len(), 4);
        assert!(content.bento[0].full_width);
        assert!(!content.bento[1].full_width);
        assert!(!content.bento[2].full_width);
        assert!(content.bento[3].full_width);
    }

    #[test]
    fn every_feature_icon_resolves() {
        let content = default_content();
        for feature in &content.features {
            assert!(
                crate::sections::icons::icon_path(&feature.icon).is_some(),
                "unknown icon key {}",
                feature.icon
            );
        }
    }
}
