//! 站点常量：个人信息、社交链接、SEO

pub struct SocialLink {
    pub name: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACT_EMAIL: &str = "anuveshchilwal007@gmail.com";

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "github",
        label: "GitHub",
        href: "https://github.com/Anuvesh07",
    },
    SocialLink {
        name: "linkedin",
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/anuvesh-chilwal-891382357/",
    },
    SocialLink {
        name: "twitter",
        label: "X",
        href: "https://x.com/AnuveshC7",
    },
    SocialLink {
        name: "email",
        label: "Email",
        href: "mailto:anuveshchilwal007@gmail.com",
    },
];

pub struct Seo {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: &'static str,
    pub site_url: &'static str,
    pub image: &'static str,
}

pub const SEO: Seo = Seo {
    title: "Anuvesh Chilwal | Full Stack Developer",
    description: "Passionate student and full stack developer exploring AI/ML, web development, and innovative software solutions. Building the future through code.",
    keywords: "anuvesh chilwal, full stack developer, web development, ai ml, student developer, react, next.js, typescript, javascript, software engineer",
    author: "Anuvesh Chilwal",
    site_url: "https://anuvesh-portfolio.vercel.app",
    image: "/images/og-image.jpg",
};

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub about_lead: &'static str,
    pub about: [&'static str; 3],
    pub location: &'static str,
    pub status: &'static str,
    pub focus_areas: [&'static str; 3],
    pub current_projects: [&'static str; 3],
}

pub const PROFILE: Profile = Profile {
    name: "Anuvesh Chilwal",
    role: "Full Stack Developer",
    tagline: "A passionate student exploring AI/ML, web development, and everything software. Driven by curiosity and a deep interest in technology, I create innovative solutions to unlock potential and help others through code.",
    about_lead: "A passionate student exploring the endless possibilities of technology and software development",
    about: [
        "Hello! I'm Anuvesh Chilwal, a passionate student with a deep fascination for AI/ML, web development, and everything related to software. My journey in technology is driven by an insatiable curiosity and a desire to understand how digital solutions can make a meaningful impact in the world.",
        "I'm currently exploring various domains including artificial intelligence, machine learning, and full-stack web development. Through hands-on projects like ChordCircle, Whitezilla, and Veshara, I'm constantly learning and pushing the boundaries of what I can create with code.",
        "What drives me is curiosity and a deep interest in the software and technology field. My career goal is to unlock all my potential and display it to the world for helping others. I believe that technology should be a force for good, and I'm committed to building solutions that make a positive difference.",
    ],
    location: "Remote & Onsite",
    status: "Student & Aspiring Developer",
    focus_areas: [
        "AI/ML Development",
        "Full Stack Web Development",
        "Software Engineering",
    ],
    current_projects: [
        "ChordCircle (Music Platform)",
        "Whitezilla (Collaborative Tool)",
        "KSA (AI Assistant)",
    ],
};
