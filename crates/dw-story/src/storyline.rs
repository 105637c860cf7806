//! The built-in storyline: a flight through the forest after the fall of
//! the monastery.

use dw_mechanics::{Armor, Enemy, Weapon};

use crate::error::StoryResult;
use crate::graph::StoryGraph;
use crate::scene::{Choice, SceneId};

// Scene ids, in authoring order.
const START: SceneId = SceneId(1);
const WIDE_PATH: SceneId = SceneId(2);
const FIGHT_KRAAN: SceneId = SceneId(3);
const CLEARING: SceneId = SceneId(4);
const FALLEN_TREE: SceneId = SceneId(5);
const KAKARMI: SceneId = SceneId(6);
const STREAM: SceneId = SceneId(7);
const CONTINUE_FOREST: SceneId = SceneId(8);
const CAMOUFLAGE: SceneId = SceneId(9);
const APPROACH: SceneId = SceneId(10);
const MARCHING: SceneId = SceneId(11);
const BATTLE: SceneId = SceneId(12);
const FIGHT_GOURGAZ: SceneId = SceneId(13);
const DEFEND_PRINCE: SceneId = SceneId(14);
const TOWN_END: SceneId = SceneId(15);
const FLEE_BATTLE: SceneId = SceneId(16);
const CONTINUE_BATTLE: SceneId = SceneId(17);
const WALK_AWAY: SceneId = SceneId(18);
const UNDERGROWTH: SceneId = SceneId(19);
const FOGWOOD: SceneId = SceneId(20);
const TRACK_PERIMETER: SceneId = SceneId(21);
const INVESTIGATE_HUTS: SceneId = SceneId(22);
const FIGHT_GIAK: SceneId = SceneId(23);
const CALL_BIRD: SceneId = SceneId(24);
const CONTINUE_TRACK: SceneId = SceneId(25);
const LEAVE_TRACK: SceneId = SceneId(26);
const CONFRONT_STRANGER: SceneId = SceneId(27);
const KILLED_MAGE: SceneId = SceneId(28);
const TAKE_GEM: SceneId = SceneId(29);
const RUN_FROM_GIAKS: SceneId = SceneId(30);
const MERCHANTS: SceneId = SceneId(31);
const WALK_OPPOSITE: SceneId = SceneId(32);
const AVOID_CLEARING: SceneId = SceneId(33);
const FELL_DEATH: SceneId = SceneId(34);
const IGNORE_BIRD: SceneId = SceneId(35);
const INVESTIGATE_SMOKE: SceneId = SceneId(36);
const AVOID_SMOKE: SceneId = SceneId(37);

const SCENES: &[(SceneId, &str)] = &[
    (
        START,
        "You must make haste, for it is not safe to linger by the smoking remains of the ruined monastery.\n\
         At the foot of the hill the path splits in two, both ways leading into a large wood.",
    ),
    (
        WIDE_PATH,
        "The path is wide and leads straight into thick undergrowth. The trees are tall here and unusually quiet.\n\
         You walk for over a mile when suddenly you hear the beating of large wings directly above you.\n\
         Looking up, you see the sinister black outline of a Kraan diving to attack.",
    ),
    (
        FIGHT_KRAAN,
        "The Kraan hovers above you, raising dust with the beat of its huge black wings.\n\
         The dust gets into your eyes and nose and you start to cough. Now the beast attacks.",
    ),
    (
        CLEARING,
        "You continue eastwards along the path until it opens out into a large clearing.\n\
         Strange claw prints mark the earth. Kraan have landed here, at least five of them by the look\n\
         of the disturbed ground.\n\n\
         There are two exits on the far side of the clearing. One leads west, the other south.",
    ),
    (
        FALLEN_TREE,
        "You walk along this path for over an hour, watching the sky in case the Kraan return.\n\
         Up ahead a large tree has fallen across the path. As you approach, you hear voices coming\n\
         from the other side of the massive trunk.",
    ),
    (
        KAKARMI,
        "Leaping from the top of the trunk, you land in front of two small furry creatures. They are Kakarmi,\n\
         an intelligent race of animals that tend the forests of Sommerlund. Before you can apologise for\n\
         your dramatic entrance, the frightened little creatures scurry off into the forest.",
    ),
    (
        STREAM,
        "The Kakarmi vanish into the undergrowth and you soon find yourself lost. After nearly two hours\n\
         you hear running water and come to the edge of a fast-flowing icy stream. You follow it east until\n\
         something in the distance brings you to a halt: on the track above stand four soldiers and their\n\
         officer, wearing the uniform of the King's army.",
    ),
    (
        CONTINUE_FOREST,
        "You let the Kakarmi go and continue your journey through the forest.\n\
         The path grows narrow and overgrown, and progress is slow.\n\
         After an hour of hacking through thorny bushes, you emerge into a small glade.",
    ),
    (
        CAMOUFLAGE,
        "You gather branches and leaves to hide yourself and wait for the soldiers to pass.\n\
         They march right by your hiding spot, unaware of you, talking of troop movements and a planned ambush.\n\
         When they have gone, you consider your next move.",
    ),
    (
        APPROACH,
        "As you near the men, you call out to them. They turn, and your skin goes cold, for they are\n\
         Drakkarim in disguise. They charge, force you to the ground and bind you with ropes. Cackling,\n\
         they talk at length of the tortures that await you at their camp.",
    ),
    (
        MARCHING,
        "After an hour of marching, the Drakkarim halt as a large grey scaly creature approaches along the track.\n\
         It lets out a roar and grabs your head in its powerful webbed hands.\n\
         The last thing you hear is the sharp crack of your own spine.",
    ),
    (
        BATTLE,
        "Ahead, a fierce battle rages across a stone bridge. In the midst of it stands Prince Pelathar,\n\
         the King's son, locked in combat with a huge grey Gourgaz wielding a black axe.\n\n\
         The Prince's sword lies on the ground at your feet.",
    ),
    (
        FIGHT_GOURGAZ,
        "You rush to the Prince's aid. The creature you face is a Gourgaz, one of the cold-blooded reptiles\n\
         that dwell deep in the Maakenmire swamps. Their favourite food is human flesh.",
    ),
    (
        DEFEND_PRINCE,
        "The Gourgaz lies dead at your feet. Its followers hiss and fall back from the bridge while the\n\
         Prince's soldiers close ranks around him. The battle is over. The Prince thanks you and offers\n\
         to take you into town.",
    ),
    (
        TOWN_END,
        "Inside the town walls you finally feel safe, though something still seems amiss.\n\
         Perhaps one day you will complete your journey. For now, you retire to the inn.",
    ),
    (
        FLEE_BATTLE,
        "You turn and flee into the dense forest. The sounds of combat fade behind you.\n\
         Eventually you find a small cave in which to rest and gather your thoughts.",
    ),
    (
        CONTINUE_BATTLE,
        "You stay hidden until the danger passes, then head deeper into the forest.\n\
         After several hours of walking you find yourself at the edge of a clearing.",
    ),
    (
        WALK_AWAY,
        "You politely decline the Prince's offer. With a respectful bow, you turn back\n\
         into the forest to seek your own path.",
    ),
    (
        UNDERGROWTH,
        "You dive into the undergrowth and run south as the Kraan's shriek fades overhead.\n\
         Thorns tear at your cloak. When you finally stop, you hear something moving in the bushes nearby.",
    ),
    (
        FOGWOOD,
        "You move quickly along the track towards Fogwood, a cluster of huts used by charcoal burners for\n\
         nearly fifty years. After twenty minutes you reach the clearing where the huts stand in a circle.\n\
         There is no sign of the wood smoke that gives Fogwood its name, and the huts are unusually quiet.",
    ),
    (
        TRACK_PERIMETER,
        "You find Giak tracks around the edge of the clearing. The prints are fresh; these cruel\n\
         minions of the Darklords passed here less than two hours ago.",
    ),
    (
        INVESTIGATE_HUTS,
        "Through the doorway of the first hut you see a charcoal burner lying face down, stabbed in the back.\n\
         Everything he owned has been smashed. This is the work of Giaks, who delight in destruction.\n\
         Among the wreckage you find a Giak Spear. You continue along the track.\n\
         Perched on the branch of an old oak tree ahead is a jet-black raven.",
    ),
    (
        FIGHT_GIAK,
        "A Kraan and its riders land barely ten feet from where you are hidden. A Giak leaps from the\n\
         creature's back and moves towards you, spear raised to strike. You have been seen.",
    ),
    (
        CALL_BIRD,
        "The bird's head slowly turns and it curses you. An instant later it flies off above the trees.\n\
         You are now sure it was a scout of the Darklords, on its way to report where you are.",
    ),
    (
        CONTINUE_TRACK,
        "After a few minutes you see a stranger clad in red standing in the centre of the track ahead.\n\
         His back is towards you and his head is hidden by a hood. On his outstretched arm perches the\n\
         black raven you saw earlier.",
    ),
    (
        LEAVE_TRACK,
        "For half an hour you press on through ferns and rich undergrowth. You stop at a clear stream to\n\
         drink, then cross it and push on. Soon you notice the smell of wood smoke drifting from the north.",
    ),
    (
        CONFRONT_STRANGER,
        "The stranger slowly turns to face you, and your blood freezes. It is a Vordak, a hideous undead\n\
         lieutenant of the Darklords. With a piercing scream it raises a huge black mace and charges,\n\
         and you feel the force of its mind pressing against your own.",
    ),
    (
        KILLED_MAGE,
        "The Vordak collapses and you can finally catch your breath. The raven has flown.\n\
         Searching the body, you find a glowing gem.",
    ),
    (
        TAKE_GEM,
        "The moment you pick up the gem, it burns through your hand with excruciating pain.\n\
         The curse consumes you, and nothing matters any more.",
    ),
    (
        RUN_FROM_GIAKS,
        "You trudge through the forest for nearly four hours. As you finally leave the trees behind,\n\
         you see a group of people with a horse-drawn carriage in the distance.",
    ),
    (
        MERCHANTS,
        "You meet a group of merchants heading to town and ask to travel with them.\n\
         You reach the town exhausted, but alive.",
    ),
    (
        WALK_OPPOSITE,
        "You keep walking until exhaustion overtakes you. You collapse and never rise again.",
    ),
    (
        AVOID_CLEARING,
        "You avoid the clearing and take a detour through the dense forest.\n\
         The going is hard, but you eventually find a small path, and after an hour of careful travel\n\
         you emerge near a rocky outcrop.",
    ),
    (
        FELL_DEATH,
        "Halfway up the rocky outcrop your foot slips, and you fall to your death.",
    ),
    (
        IGNORE_BIRD,
        "You ignore the raven and walk on. Its beady eyes follow your every move. After a while it takes\n\
         flight, circles above you, and heads off in the direction you came from.",
    ),
    (
        INVESTIGATE_SMOKE,
        "You follow the scent of wood smoke to a small clearing where an old man sits beside a campfire.\n\
         He looks up, unsurprised, and introduces himself as a sage who has lived in these woods for many years.",
    ),
    (
        AVOID_SMOKE,
        "You turn east, away from the smoke. The forest grows denser and the tall trees blot out the sun.\n\
         You push on through the gloom, hoping to find safer lands.",
    ),
];

const CHOICES: &[(SceneId, &str, SceneId)] = &[
    (START, "Take the right path into the wood", WIDE_PATH),
    (START, "Follow the left track", FOGWOOD),
    (WIDE_PATH, "Draw your weapon and prepare to fight", FIGHT_KRAAN),
    (WIDE_PATH, "Evade the attack by running south, deeper into the forest", UNDERGROWTH),
    (FIGHT_KRAAN, "Engage in combat", CLEARING),
    (FIGHT_KRAAN, "Flee to the east path", FOGWOOD),
    (CLEARING, "Take the south path", FALLEN_TREE),
    (CLEARING, "Take the west path", AVOID_CLEARING),
    (FALLEN_TREE, "Leap over the trunk", KAKARMI),
    (FALLEN_TREE, "Listen to what the voices say", TRACK_PERIMETER),
    (KAKARMI, "Follow the Kakarmi", STREAM),
    (KAKARMI, "Continue your journey without them", CONTINUE_FOREST),
    (STREAM, "Camouflage yourself and wait for the soldiers to pass", CAMOUFLAGE),
    (STREAM, "Approach the soldiers", APPROACH),
    // APPROACH's first choice is a roll check, added separately.
    (APPROACH, "Wait for something to happen", MARCHING),
    (BATTLE, "Defend the Prince", FIGHT_GOURGAZ),
    (BATTLE, "Run into the forest", FLEE_BATTLE),
    (FIGHT_GOURGAZ, "Engage in battle", DEFEND_PRINCE),
    (DEFEND_PRINCE, "Follow the Prince to town", TOWN_END),
    (DEFEND_PRINCE, "Politely decline and walk away", WALK_AWAY),
    (FOGWOOD, "Track the perimeter", TRACK_PERIMETER),
    (FOGWOOD, "Ready your weapon and creep towards the huts", FIGHT_GIAK),
    (FIGHT_GIAK, "Engage in battle", INVESTIGATE_HUTS),
    (FIGHT_GIAK, "Run away", AVOID_CLEARING),
    (TRACK_PERIMETER, "Investigate the huts, forewarned", INVESTIGATE_HUTS),
    (TRACK_PERIMETER, "Avoid the clearing", AVOID_CLEARING),
    (INVESTIGATE_HUTS, "Call the bird", CALL_BIRD),
    (INVESTIGATE_HUTS, "Ignore it", IGNORE_BIRD),
    (CALL_BIRD, "Continue along the track", CONTINUE_TRACK),
    (CALL_BIRD, "Leave the track and cut through the forest", LEAVE_TRACK),
    (CONTINUE_TRACK, "Call out to the stranger", CONFRONT_STRANGER),
    (CONTINUE_TRACK, "Draw your weapon and attack", CONFRONT_STRANGER),
    (CONFRONT_STRANGER, "Engage in battle", KILLED_MAGE),
    (CONFRONT_STRANGER, "Flee", RUN_FROM_GIAKS),
    (KILLED_MAGE, "Take the gem", TAKE_GEM),
    (KILLED_MAGE, "Walk away", RUN_FROM_GIAKS),
    (RUN_FROM_GIAKS, "Approach them", MERCHANTS),
    (RUN_FROM_GIAKS, "Walk in the opposite direction", WALK_OPPOSITE),
    (IGNORE_BIRD, "Continue along the path", CONTINUE_TRACK),
    (IGNORE_BIRD, "Take a detour through the forest", LEAVE_TRACK),
    (LEAVE_TRACK, "Investigate the smell of wood smoke", INVESTIGATE_SMOKE),
    (LEAVE_TRACK, "Avoid the source of the smoke", AVOID_SMOKE),
    (INVESTIGATE_SMOKE, "Ask the sage for guidance", MERCHANTS),
    (INVESTIGATE_SMOKE, "Thank him and continue your journey", BATTLE),
    (AVOID_SMOKE, "Head towards the mountains", TOWN_END),
    (AVOID_SMOKE, "Follow a faint path through the trees", MARCHING),
    (AVOID_CLEARING, "Climb the rocky outcrop for a better view", FELL_DEATH),
    (AVOID_CLEARING, "Continue east through the forest", MERCHANTS),
    (CONTINUE_FOREST, "Investigate a strange sound in the bushes", FIGHT_GIAK),
    (CONTINUE_FOREST, "Keep moving forward cautiously", MERCHANTS),
    (UNDERGROWTH, "Hide under dense foliage", CONTINUE_BATTLE),
    (UNDERGROWTH, "Draw your weapon and prepare to fight", FIGHT_GIAK),
    (CAMOUFLAGE, "Continue your journey after they pass", MERCHANTS),
    (CAMOUFLAGE, "Follow the soldiers at a safe distance", MARCHING),
    (FLEE_BATTLE, "Rest and recover your strength", WALK_OPPOSITE),
    (FLEE_BATTLE, "Explore the surrounding area", MERCHANTS),
    (CONTINUE_BATTLE, "Follow the wind", CLEARING),
    (CONTINUE_BATTLE, "Continue on your current path", TOWN_END),
];

/// Build the forest storyline.
pub fn build() -> StoryResult<StoryGraph> {
    let mut graph = StoryGraph::new();
    for &(id, text) in SCENES {
        graph.create_scene(id, text)?;
    }

    graph
        .scene_mut(FIGHT_KRAAN)?
        .set_enemy(Enemy::new("Kraan", 20, 6, 2))
        .add_weapon_loot(Weapon::new("Dagger", 3));
    graph
        .scene_mut(BATTLE)?
        .add_weapon_loot(Weapon::new("Prince's Sword", 5));
    graph
        .scene_mut(FIGHT_GOURGAZ)?
        .set_enemy(Enemy::new("Gourgaz", 30, 8, 3));
    graph
        .scene_mut(INVESTIGATE_HUTS)?
        .add_weapon_loot(Weapon::new("Giak Spear", 4));
    graph
        .scene_mut(FIGHT_GIAK)?
        .set_enemy(Enemy::new("Giak", 10, 13, 4));
    graph
        .scene_mut(CONFRONT_STRANGER)?
        .set_enemy(Enemy::new("Vordak", 25, 7, 3))
        .add_armor_loot(Armor::new("Mage Armor", 4));

    graph.scene_mut(APPROACH)?.add_choice(
        Choice::new("Attempt to escape (success on a roll of 10+)", BATTLE)
            .with_check(10, MARCHING),
    );
    for &(from, text, to) in CHOICES {
        graph.scene_mut(from)?.add_choice(Choice::new(text, to));
    }

    graph.set_start_scene(START)?;
    tracing::debug!(scenes = graph.len(), "storyline built");
    Ok(graph)
}

/// Title banner lines.
pub fn banner() -> [&'static str; 3] {
    [
        "DARKWOOD",
        "~ Inspired by the Lone Wolf: Flight from the Dark ~",
        "~ A simplified version of text RPG ~",
    ]
}

/// Opening narration, addressed to the player.
pub fn introduction(name: &str) -> Vec<String> {
    vec![
        format!(
            "On this fateful morning, you, {name}, have been sent to collect firewood in the forest as a punishment"
        ),
        "for your inattention in class. As you prepare to return, you see to your horror a vast cloud of black".to_string(),
        "leathery creatures swoop down and engulf the monastery. Dropping the wood, you race to the battle and grab".to_string(),
        "your equipment, but in the unnatural dark you stumble and strike your head on a low branch. As you lose".to_string(),
        "consciousness, the last thing you see in the poor light are the walls of the monastery crashing to the ground.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dw_mechanics::Combatant;

    #[test]
    fn storyline_is_valid() {
        let graph = build().unwrap();
        assert_eq!(graph.len(), SCENES.len());
        assert!(graph.validate().is_empty(), "{:?}", graph.validate());
        assert_eq!(graph.start_scene(), Some(START));
    }

    #[test]
    fn four_enemies() {
        let graph = build().unwrap();
        let mut names: Vec<&str> = graph
            .scenes()
            .filter_map(|s| s.enemy())
            .map(|e| e.name())
            .collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Giak", "Gourgaz", "Kraan", "Vordak"]);
    }

    #[test]
    fn single_roll_check() {
        let graph = build().unwrap();
        let checked: Vec<_> = graph
            .scenes()
            .flat_map(|s| s.choices().iter().map(move |c| (s.id(), c)))
            .filter(|(_, c)| c.is_checked())
            .collect();
        assert_eq!(checked.len(), 1);
        let (id, choice) = checked[0];
        assert_eq!(id, APPROACH);
        assert_eq!(choice.min_roll, 10);
        assert_eq!(choice.next, BATTLE);
        assert_eq!(choice.fail, Some(MARCHING));
    }

    #[test]
    fn terminal_scenes() {
        let graph = build().unwrap();
        let mut terminal: Vec<SceneId> = graph
            .scenes()
            .filter(|s| s.is_terminal())
            .map(|s| s.id())
            .collect();
        terminal.sort();
        assert_eq!(
            terminal,
            vec![MARCHING, TOWN_END, WALK_AWAY, TAKE_GEM, MERCHANTS, WALK_OPPOSITE, FELL_DEATH]
        );
    }

    #[test]
    fn kraan_guards_the_dagger() {
        let graph = build().unwrap();
        let lair = graph.scene(FIGHT_KRAAN).unwrap();
        assert!(lair.has_live_enemy());
        assert_eq!(lair.weapon_loot()[0].name(), "Dagger");
        assert_eq!(lair.choices()[0].next, CLEARING);
    }

    #[test]
    fn introduction_names_the_player() {
        let intro = introduction("Ana");
        assert!(intro[0].contains("you, Ana,"));
        assert_eq!(intro.len(), 5);
    }
}
