//! Site owner profile: hero copy, about-page sections, contact details.

use crate::model::{ContactChannel, Experience, Faq, Profile, Skill, SocialLink, Stat, TechGroup};

pub(crate) static PROFILE: Profile = Profile {
    name: "Priyav",
    role: "Full Stack Developer & Creative Problem Solver",
    tagline: "I craft digital experiences that blend beautiful design with powerful functionality. Passionate about creating solutions that make a difference in people's lives.",
    availability: "Available for new projects",
    intro: "I'm a passionate developer with a love for creating digital experiences that matter. With expertise in both frontend and backend technologies, I bring ideas to life.",
    email: "priyav@example.com",
    phone: "+1 (555) 123-4567",
    location: "San Francisco, CA",
    resume_href: "/resume.pdf",
    socials: &[
        SocialLink { label: "GitHub", href: "https://github.com" },
        SocialLink { label: "LinkedIn", href: "https://linkedin.com" },
        SocialLink { label: "Twitter", href: "https://twitter.com" },
        SocialLink { label: "Email", href: "mailto:priyav@example.com" },
    ],
    stats: &[
        Stat { label: "Projects Completed", value: "50+" },
        Stat { label: "Cups of Coffee", value: "1000+" },
        Stat { label: "Happy Clients", value: "30+" },
        Stat { label: "Lines of Code", value: "100K+" },
    ],
    skills: &[
        Skill {
            title: "Development",
            description: "Full-stack development with modern technologies like React, Next.js, Node.js, and Python.",
            accent: "blue",
        },
        Skill {
            title: "Design",
            description: "Creating beautiful, user-centered designs with attention to detail and accessibility.",
            accent: "purple",
        },
        Skill {
            title: "Performance",
            description: "Building fast, optimized applications that provide excellent user experiences.",
            accent: "orange",
        },
        Skill {
            title: "Collaboration",
            description: "Working effectively in teams and communicating complex ideas clearly.",
            accent: "green",
        },
    ],
    journey: &[
        "Started as a curious student exploring the world of programming, I've evolved into a full-stack developer with a passion for creating meaningful digital experiences. My journey has been driven by continuous learning and a desire to solve real-world problems.",
        "Over the years, I've had the privilege of working with amazing teams and clients, building everything from small business websites to large-scale enterprise applications. Each project has taught me something new and helped me grow as both a developer and a problem solver.",
        "When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or sharing knowledge through my blog. I believe in the power of technology to make a positive impact on people's lives.",
    ],
    tech_groups: &[
        TechGroup { category: "Frontend", techs: &["React", "Next.js", "TypeScript", "Tailwind CSS", "Vue.js", "Svelte"] },
        TechGroup { category: "Backend", techs: &["Node.js", "Python", "PostgreSQL", "MongoDB", "Redis", "GraphQL"] },
        TechGroup { category: "Tools & Cloud", techs: &["AWS", "Docker", "Git", "Vercel", "Figma", "VS Code"] },
    ],
    experience: &[
        Experience {
            title: "Senior Full Stack Developer",
            company: "Tech Solutions Inc.",
            period: "2022 - Present",
            description: "Leading development of scalable web applications using React, Node.js, and cloud technologies.",
            achievements: &["Led team of 5 developers", "Increased performance by 40%", "Delivered 15+ projects"],
        },
        Experience {
            title: "Frontend Developer",
            company: "Digital Agency Co.",
            period: "2020 - 2022",
            description: "Developed responsive web applications and collaborated with design teams to create engaging user experiences.",
            achievements: &["Built 20+ responsive websites", "Improved user engagement by 60%", "Mentored junior developers"],
        },
        Experience {
            title: "Junior Developer",
            company: "StartupXYZ",
            period: "2019 - 2020",
            description: "Built and maintained web applications while learning modern development practices and technologies.",
            achievements: &["Contributed to 10+ projects", "Learned 5+ new technologies", "Received 'Rising Star' award"],
        },
    ],
    contact_channels: &[
        ContactChannel { title: "Email", value: "priyav@example.com", description: "Send me an email anytime" },
        ContactChannel { title: "Phone", value: "+1 (555) 123-4567", description: "Call me during business hours" },
        ContactChannel { title: "Location", value: "San Francisco, CA", description: "Available for local meetings" },
        ContactChannel { title: "Response Time", value: "Within 24 hours", description: "I'll get back to you quickly" },
    ],
    services: &[
        "Full-stack web application development",
        "Frontend development with React/Next.js",
        "Backend API development",
        "Code reviews and consulting",
        "Technical mentoring",
    ],
    faqs: &[
        Faq {
            question: "How quickly do you respond?",
            answer: "I typically respond to emails within 24 hours, often much sooner.",
        },
        Faq {
            question: "Do you work on weekends?",
            answer: "While I prefer to keep weekends free, I'm flexible for urgent projects or different time zones.",
        },
        Faq {
            question: "What's your availability?",
            answer: "I'm currently available for new projects. Let's discuss your timeline and requirements.",
        },
    ],
};
