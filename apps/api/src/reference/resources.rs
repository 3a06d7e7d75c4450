use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningResource {
    pub title: &'static str,
    pub link: &'static str,
    pub kind: &'static str,
    pub cost: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceTopic {
    pub topic: &'static str,
    pub resources: &'static [LearningResource],
}

const fn resource(
    title: &'static str,
    link: &'static str,
    kind: &'static str,
    cost: &'static str,
) -> LearningResource {
    LearningResource {
        title,
        link,
        kind,
        cost,
    }
}

pub const RESOURCE_TOPICS: [ResourceTopic; 6] = [
    ResourceTopic {
        topic: "Kubernetes",
        resources: &[
            resource(
                "Kubernetes Official Docs",
                "https://kubernetes.io/docs/home/",
                "Documentation",
                "Free",
            ),
            resource(
                "Certified Kubernetes Administrator (CKA)",
                "https://training.linuxfoundation.org/certification/certified-kubernetes-administrator-cka/",
                "Certification",
                "Paid",
            ),
            resource(
                "Kubernetes for the Absolute Beginners (Udemy)",
                "https://www.udemy.com/course/learn-kubernetes/",
                "Course",
                "Paid",
            ),
        ],
    },
    ResourceTopic {
        topic: "Docker",
        resources: &[
            resource(
                "Docker Get Started",
                "https://docs.docker.com/get-started/",
                "Documentation",
                "Free",
            ),
            resource(
                "Docker Mastery: with Kubernetes +Swarm (Udemy)",
                "https://www.udemy.com/course/docker-mastery/",
                "Course",
                "Paid",
            ),
        ],
    },
    ResourceTopic {
        topic: "AWS",
        resources: &[
            resource(
                "AWS Skill Builder",
                "https://explore.skillbuilder.aws/",
                "Course",
                "Freemium",
            ),
            resource(
                "AWS Certified Solutions Architect - Associate",
                "https://aws.amazon.com/certification/certified-solutions-architect-associate/",
                "Certification",
                "Paid",
            ),
        ],
    },
    ResourceTopic {
        topic: "Python",
        resources: &[
            resource(
                "Python.org Official Tutorial",
                "https://docs.python.org/3/tutorial/",
                "Documentation",
                "Free",
            ),
            resource(
                "Automate the Boring Stuff with Python",
                "https://automatetheboringstuff.com/",
                "Book/Course",
                "Free",
            ),
        ],
    },
    ResourceTopic {
        topic: "CI/CD",
        resources: &[
            resource(
                "GitLab CI/CD Docs",
                "https://docs.gitlab.com/ee/ci/",
                "Documentation",
                "Free",
            ),
            resource(
                "Jenkins - The Definitive Guide",
                "https://www.jenkins.io/doc/",
                "Documentation",
                "Free",
            ),
        ],
    },
    ResourceTopic {
        topic: "System Design",
        resources: &[
            resource(
                "System Design Primer (GitHub)",
                "https://github.com/donnemartin/system-design-primer",
                "Guide",
                "Free",
            ),
            resource(
                "Grokking the System Design Interview",
                "https://www.designgurus.io/course/grokking-the-system-design-interview",
                "Course",
                "Paid",
            ),
        ],
    },
];

/// A topic in display order, flagged when it covers one of the user's gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedTopic {
    #[serde(flatten)]
    pub topic: &'static ResourceTopic,
    pub matches_gap: bool,
}

fn covers(topic: &str, skill: &str) -> bool {
    let topic = topic.to_lowercase();
    let skill = skill.trim().to_lowercase();
    !skill.is_empty() && (topic.contains(&skill) || skill.contains(&topic))
}

/// Orders every topic: those covering a missing skill first, in missing-skill
/// order, then the rest in table order. Each topic appears once.
pub fn rank_topics<S: AsRef<str>>(missing: &[S]) -> Vec<RankedTopic> {
    let mut ranked: Vec<RankedTopic> = Vec::with_capacity(RESOURCE_TOPICS.len());

    for skill in missing {
        for topic in &RESOURCE_TOPICS {
            let seen = ranked.iter().any(|r| r.topic.topic == topic.topic);
            if !seen && covers(topic.topic, skill.as_ref()) {
                ranked.push(RankedTopic {
                    topic,
                    matches_gap: true,
                });
            }
        }
    }

    for topic in &RESOURCE_TOPICS {
        if !ranked.iter().any(|r| r.topic.topic == topic.topic) {
            ranked.push(RankedTopic {
                topic,
                matches_gap: false,
            });
        }
    }
    ranked
}
