//! Skills section: technical areas, rated programming skills, and the rest.

use leptos::prelude::*;

use crate::data::skills::{RatedSkill, SOFT_SKILLS, Skill, TECHNICAL_SKILLS, additional_skills, rated_skills};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills__group">
                <h3>"Technical Skills"</h3>
                <SkillTiles skills=TECHNICAL_SKILLS/>
            </div>
            <div class="skills__group">
                <h3>"Programming Skills"</h3>
                <div class="skills__bars">
                    {rated_skills().iter().map(|skill| view! { <SkillBar skill=*skill/> }).collect_view()}
                </div>
            </div>
            <div class="skills__group">
                <h3>"Additional Skills"</h3>
                <div class="skills__tiles">
                    {additional_skills()
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skill-tile" title=skill.level.label()>
                                    <span class="skill-tile__icon">{skill.icon}</span>
                                    <span>{skill.name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="skills__group">
                <h3>"Soft Skills"</h3>
                <SkillTiles skills=SOFT_SKILLS/>
            </div>
        </section>
    }
}

#[component]
fn SkillTiles(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <div class="skills__tiles">
            {skills
                .iter()
                .map(|skill| {
                    view! {
                        <div class="skill-tile">
                            <span class="skill-tile__icon">{skill.icon}</span>
                            <span>{skill.name}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillBar(skill: RatedSkill) -> impl IntoView {
    view! {
        <div class="skill-bar">
            <div class="skill-bar__header">
                <span>{skill.icon} " " {skill.name}</span>
                <span class="skill-bar__level">{skill.level.label()}</span>
            </div>
            <div class="skill-bar__track">
                <div
                    class=format!("skill-bar__fill {}", skill.level.css_modifier())
                    style:width=format!("{}%", skill.level.fill_percent())
                ></div>
            </div>
        </div>
    }
}
