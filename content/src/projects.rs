//! Built-in projects.

use crate::model::{Project, ProjectSummary};

const CARD_IMAGE: &str = "/placeholder.svg?height=300&width=400";
const HERO_IMAGE: &str = "/placeholder.svg?height=400&width=800";
const GALLERY: &[&str] = &[CARD_IMAGE, CARD_IMAGE, CARD_IMAGE, CARD_IMAGE];

const LIVE_URL: &str = "https://example.com";
const GITHUB_URL: &str = "https://github.com";

pub(crate) static PROJECT_SUMMARIES: &[ProjectSummary] = &[
    ProjectSummary {
        slug: "ecommerce-platform",
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with React, Node.js, and Stripe integration. Features include user authentication, product management, and order processing.",
        image: CARD_IMAGE,
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Express", "JWT"],
        live_url: LIVE_URL,
        github_url: GITHUB_URL,
        featured: true,
    },
    ProjectSummary {
        slug: "task-management-app",
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
        image: CARD_IMAGE,
        technologies: &["Next.js", "Socket.io", "PostgreSQL", "Tailwind CSS", "Prisma"],
        live_url: LIVE_URL,
        github_url: GITHUB_URL,
        featured: true,
    },
    ProjectSummary {
        slug: "weather-dashboard",
        title: "Weather Dashboard",
        description: "A responsive weather dashboard that provides detailed weather information with beautiful visualizations and location-based forecasts.",
        image: CARD_IMAGE,
        technologies: &["React", "Chart.js", "Weather API", "CSS3"],
        live_url: LIVE_URL,
        github_url: GITHUB_URL,
        featured: false,
    },
    ProjectSummary {
        slug: "blog-platform",
        title: "Blog Platform",
        description: "A modern blog platform with markdown support, comment system, and admin dashboard for content management.",
        image: CARD_IMAGE,
        technologies: &["Next.js", "MDX", "Prisma", "NextAuth"],
        live_url: LIVE_URL,
        github_url: GITHUB_URL,
        featured: false,
    },
    ProjectSummary {
        slug: "social-media-app",
        title: "Social Media App",
        description: "A full-featured social media application with real-time messaging, post sharing, and user interactions.",
        image: CARD_IMAGE,
        technologies: &["React Native", "Firebase", "Redux", "Node.js"],
        live_url: LIVE_URL,
        github_url: GITHUB_URL,
        featured: true,
    },
    ProjectSummary {
        slug: "portfolio-website",
        title: "Portfolio Website",
        description: "A responsive portfolio website built with modern web technologies, featuring dark mode and smooth animations.",
        image: CARD_IMAGE,
        technologies: &["Next.js", "Tailwind CSS", "Framer Motion", "TypeScript"],
        live_url: LIVE_URL,
        github_url: GITHUB_URL,
        featured: false,
    },
];

pub(crate) static PROJECTS: &[Project] = &[
    Project {
        slug: "ecommerce-platform",
        title: "E-Commerce Platform",
        description: "A comprehensive e-commerce solution built with modern web technologies.",
        long_description: "This full-stack e-commerce platform was built to provide a seamless shopping experience for both customers and administrators. The project showcases advanced React patterns, secure payment processing, and scalable backend architecture.

The platform includes features like user authentication, product catalog management, shopping cart functionality, order processing, and an admin dashboard for managing the entire system.",
        image: HERO_IMAGE,
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Express", "JWT", "Redux", "Tailwind CSS"],
        live_url: LIVE_URL,
        github_url: GITHUB_URL,
        features: &[
            "User authentication and authorization",
            "Product catalog with search and filtering",
            "Shopping cart and checkout process",
            "Stripe payment integration",
            "Order management system",
            "Admin dashboard",
            "Responsive design",
            "Email notifications",
        ],
        challenges: &[
            "Implementing secure payment processing with Stripe",
            "Building a scalable product search system",
            "Optimizing performance for large product catalogs",
            "Creating a responsive design that works across all devices",
        ],
        gallery: GALLERY,
    },
    Project {
        slug: "task-management-app",
        title: "Task Management App",
        description: "A collaborative task management application with real-time features.",
        long_description: "A modern task management application designed for teams to collaborate effectively. Built with Next.js and featuring real-time updates, drag-and-drop functionality, and comprehensive project management tools.

The application allows teams to create projects, assign tasks, track progress, and communicate in real-time, making it an ideal solution for agile development teams and project managers.",
        image: HERO_IMAGE,
        technologies: &["Next.js", "Socket.io", "PostgreSQL", "Tailwind CSS", "Prisma", "NextAuth", "TypeScript"],
        live_url: LIVE_URL,
        github_url: GITHUB_URL,
        features: &[
            "Real-time collaboration",
            "Drag-and-drop task management",
            "Project and team management",
            "Task assignment and tracking",
            "File attachments",
            "Comment system",
            "Progress tracking",
            "Email notifications",
        ],
        challenges: &[
            "Implementing real-time updates with Socket.io",
            "Building intuitive drag-and-drop interfaces",
            "Managing complex state across multiple components",
            "Ensuring data consistency in real-time environment",
        ],
        gallery: GALLERY,
    },
];
