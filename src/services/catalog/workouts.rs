//! Workout templates keyed by goal, location and experience level.
//!
//! Only the two gym programs for weight loss and muscle gain have an
//! intermediate variant.

use crate::models::{DayPlan, Exercise, Reps, WorkoutTemplate};
use Reps::{Count, Described};

const fn ex(name: &'static str, sets: u32, reps: Reps, rest: &'static str) -> Exercise {
    Exercise { name, sets, reps, rest }
}

pub(super) static LOSE_WEIGHT_GYM_BEGINNER: WorkoutTemplate = &[
    DayPlan {
        day: 1,
        name: "Full Body Circuit",
        exercises: &[
            ex("Squats", 3, Count(12), "60s"),
            ex("Bench Press", 3, Count(10), "60s"),
            ex("Bent Over Rows", 3, Count(10), "60s"),
            ex("Leg Press", 3, Count(15), "45s"),
            ex("Cardio (Treadmill)", 1, Described("20 min"), "-"),
        ],
    },
    DayPlan {
        day: 2,
        name: "Cardio & Core",
        exercises: &[
            ex("Running", 1, Described("30 min"), "-"),
            ex("Plank", 3, Described("45s"), "30s"),
            ex("Crunches", 3, Count(20), "30s"),
            ex("Mountain Climbers", 3, Count(30), "30s"),
        ],
    },
    DayPlan {
        day: 3,
        name: "Upper Body Focus",
        exercises: &[
            ex("Push-ups", 3, Count(12), "45s"),
            ex("Lat Pulldowns", 3, Count(12), "60s"),
            ex("Shoulder Press", 3, Count(10), "60s"),
            ex("Bicep Curls", 3, Count(12), "45s"),
        ],
    },
    DayPlan {
        day: 4,
        name: "Lower Body & Cardio",
        exercises: &[
            ex("Squats", 4, Count(15), "60s"),
            ex("Lunges", 3, Count(12), "45s"),
            ex("Leg Curls", 3, Count(12), "45s"),
            ex("Cycling", 1, Described("25 min"), "-"),
        ],
    },
];

pub(super) static LOSE_WEIGHT_GYM_INTERMEDIATE: WorkoutTemplate = &[
    DayPlan {
        day: 1,
        name: "Push Day",
        exercises: &[
            ex("Bench Press", 4, Count(8), "90s"),
            ex("Incline Dumbbell Press", 3, Count(10), "75s"),
            ex("Shoulder Press", 3, Count(10), "75s"),
            ex("Tricep Dips", 3, Count(12), "60s"),
            ex("Cardio (HIIT)", 1, Described("15 min"), "-"),
        ],
    },
    DayPlan {
        day: 2,
        name: "Pull Day",
        exercises: &[
            ex("Deadlifts", 4, Count(6), "120s"),
            ex("Pull-ups", 3, Count(8), "90s"),
            ex("Barbell Rows", 3, Count(10), "75s"),
            ex("Bicep Curls", 3, Count(12), "60s"),
        ],
    },
    DayPlan {
        day: 3,
        name: "Leg Day",
        exercises: &[
            ex("Squats", 4, Count(10), "90s"),
            ex("Romanian Deadlifts", 3, Count(10), "90s"),
            ex("Leg Press", 3, Count(15), "60s"),
            ex("Leg Curls", 3, Count(12), "60s"),
            ex("Cardio (Stairmaster)", 1, Described("20 min"), "-"),
        ],
    },
    DayPlan {
        day: 4,
        name: "Full Body HIIT",
        exercises: &[
            ex("Burpees", 4, Count(10), "45s"),
            ex("Kettlebell Swings", 3, Count(15), "45s"),
            ex("Battle Ropes", 3, Described("30s"), "30s"),
            ex("Box Jumps", 3, Count(12), "60s"),
        ],
    },
];

pub(super) static LOSE_WEIGHT_HOME_BEGINNER: WorkoutTemplate = &[
    DayPlan {
        day: 1,
        name: "Bodyweight Full Body",
        exercises: &[
            ex("Bodyweight Squats", 3, Count(15), "45s"),
            ex("Push-ups", 3, Count(10), "45s"),
            ex("Plank", 3, Described("30s"), "30s"),
            ex("Jumping Jacks", 3, Count(30), "30s"),
            ex("Lunges", 3, Count(12), "45s"),
        ],
    },
    DayPlan {
        day: 2,
        name: "Cardio Day",
        exercises: &[
            ex("High Knees", 3, Described("30s"), "30s"),
            ex("Burpees", 3, Count(8), "45s"),
            ex("Mountain Climbers", 3, Count(20), "30s"),
            ex("Jump Rope (simulated)", 3, Described("60s"), "30s"),
        ],
    },
    DayPlan {
        day: 3,
        name: "Core Focus",
        exercises: &[
            ex("Crunches", 3, Count(20), "30s"),
            ex("Plank", 3, Described("45s"), "30s"),
            ex("Russian Twists", 3, Count(20), "30s"),
            ex("Leg Raises", 3, Count(15), "30s"),
        ],
    },
    DayPlan {
        day: 4,
        name: "Upper Body",
        exercises: &[
            ex("Push-ups", 3, Count(12), "45s"),
            ex("Diamond Push-ups", 2, Count(8), "45s"),
            ex("Pike Push-ups", 3, Count(10), "45s"),
            ex("Plank Shoulder Taps", 3, Count(20), "30s"),
        ],
    },
];

pub(super) static GAIN_MUSCLE_GYM_BEGINNER: WorkoutTemplate = &[
    DayPlan {
        day: 1,
        name: "Push Day",
        exercises: &[
            ex("Bench Press", 4, Count(8), "90s"),
            ex("Incline Dumbbell Press", 3, Count(10), "75s"),
            ex("Shoulder Press", 3, Count(10), "75s"),
            ex("Tricep Extensions", 3, Count(12), "60s"),
            ex("Lateral Raises", 3, Count(12), "45s"),
        ],
    },
    DayPlan {
        day: 2,
        name: "Pull Day",
        exercises: &[
            ex("Deadlifts", 4, Count(6), "120s"),
            ex("Pull-ups", 3, Count(8), "90s"),
            ex("Barbell Rows", 3, Count(10), "75s"),
            ex("Bicep Curls", 3, Count(12), "60s"),
            ex("Hammer Curls", 3, Count(12), "60s"),
        ],
    },
    DayPlan {
        day: 3,
        name: "Leg Day",
        exercises: &[
            ex("Squats", 4, Count(8), "120s"),
            ex("Romanian Deadlifts", 3, Count(10), "90s"),
            ex("Leg Press", 3, Count(12), "75s"),
            ex("Leg Curls", 3, Count(12), "60s"),
            ex("Calf Raises", 3, Count(15), "45s"),
        ],
    },
    DayPlan { day: 4, name: "Rest Day", exercises: &[] },
];

pub(super) static GAIN_MUSCLE_GYM_INTERMEDIATE: WorkoutTemplate = &[
    DayPlan {
        day: 1,
        name: "Chest & Triceps",
        exercises: &[
            ex("Bench Press", 5, Count(5), "120s"),
            ex("Incline Dumbbell Press", 4, Count(8), "90s"),
            ex("Cable Flyes", 3, Count(12), "60s"),
            ex("Close Grip Bench Press", 3, Count(8), "90s"),
            ex("Tricep Pushdowns", 3, Count(12), "60s"),
        ],
    },
    DayPlan {
        day: 2,
        name: "Back & Biceps",
        exercises: &[
            ex("Deadlifts", 5, Count(5), "180s"),
            ex("Pull-ups", 4, Count(8), "90s"),
            ex("Barbell Rows", 4, Count(8), "90s"),
            ex("T-Bar Rows", 3, Count(10), "75s"),
            ex("Barbell Curls", 3, Count(10), "60s"),
            ex("Hammer Curls", 3, Count(12), "60s"),
        ],
    },
    DayPlan {
        day: 3,
        name: "Legs & Glutes",
        exercises: &[
            ex("Squats", 5, Count(5), "180s"),
            ex("Romanian Deadlifts", 4, Count(8), "120s"),
            ex("Leg Press", 4, Count(12), "90s"),
            ex("Leg Extensions", 3, Count(12), "60s"),
            ex("Leg Curls", 3, Count(12), "60s"),
            ex("Calf Raises", 4, Count(15), "45s"),
        ],
    },
    DayPlan {
        day: 4,
        name: "Shoulders & Arms",
        exercises: &[
            ex("Overhead Press", 4, Count(8), "90s"),
            ex("Lateral Raises", 4, Count(12), "60s"),
            ex("Rear Delt Flyes", 3, Count(12), "60s"),
            ex("Bicep Curls", 3, Count(10), "60s"),
            ex("Tricep Extensions", 3, Count(12), "60s"),
        ],
    },
];

pub(super) static GAIN_MUSCLE_HOME_BEGINNER: WorkoutTemplate = &[
    DayPlan {
        day: 1,
        name: "Upper Body",
        exercises: &[
            ex("Push-ups", 4, Count(12), "60s"),
            ex("Diamond Push-ups", 3, Count(10), "60s"),
            ex("Pike Push-ups", 3, Count(10), "60s"),
            ex("Pull-ups (if available)", 3, Count(8), "90s"),
            ex("Plank", 3, Described("60s"), "45s"),
        ],
    },
    DayPlan {
        day: 2,
        name: "Lower Body",
        exercises: &[
            ex("Squats", 4, Count(15), "60s"),
            ex("Lunges", 3, Count(12), "60s"),
            ex("Jump Squats", 3, Count(10), "60s"),
            ex("Glute Bridges", 3, Count(15), "45s"),
            ex("Calf Raises", 3, Count(20), "45s"),
        ],
    },
    DayPlan {
        day: 3,
        name: "Full Body",
        exercises: &[
            ex("Burpees", 3, Count(10), "60s"),
            ex("Mountain Climbers", 3, Count(30), "45s"),
            ex("Plank to Push-up", 3, Count(10), "60s"),
            ex("Jumping Lunges", 3, Count(12), "60s"),
        ],
    },
    DayPlan { day: 4, name: "Rest Day", exercises: &[] },
];

pub(super) static IMPROVE_ENDURANCE_GYM_BEGINNER: WorkoutTemplate = &[
    DayPlan {
        day: 1,
        name: "Cardio & Strength",
        exercises: &[
            ex("Running", 1, Described("20 min"), "-"),
            ex("Squats", 3, Count(15), "45s"),
            ex("Push-ups", 3, Count(12), "45s"),
            ex("Plank", 3, Described("45s"), "30s"),
        ],
    },
    DayPlan {
        day: 2,
        name: "Endurance Circuit",
        exercises: &[
            ex("Cycling", 1, Described("30 min"), "-"),
            ex("Bodyweight Squats", 3, Count(20), "30s"),
            ex("Jumping Jacks", 3, Count(40), "30s"),
        ],
    },
    DayPlan {
        day: 3,
        name: "HIIT Training",
        exercises: &[
            ex("Sprint Intervals", 6, Described("30s on/30s off"), "30s"),
            ex("Burpees", 3, Count(10), "45s"),
            ex("Mountain Climbers", 3, Count(30), "30s"),
        ],
    },
    DayPlan {
        day: 4,
        name: "Long Distance",
        exercises: &[
            ex("Running", 1, Described("40 min"), "-"),
            ex("Stretching", 1, Described("10 min"), "-"),
        ],
    },
];

pub(super) static IMPROVE_ENDURANCE_HOME_BEGINNER: WorkoutTemplate = &[
    DayPlan {
        day: 1,
        name: "Cardio Blast",
        exercises: &[
            ex("Jumping Jacks", 4, Count(30), "30s"),
            ex("High Knees", 4, Described("30s"), "30s"),
            ex("Burpees", 3, Count(10), "45s"),
            ex("Mountain Climbers", 3, Count(30), "30s"),
        ],
    },
    DayPlan {
        day: 2,
        name: "Endurance Run",
        exercises: &[
            ex("Running (outdoor)", 1, Described("30 min"), "-"),
            ex("Walking", 1, Described("10 min"), "-"),
        ],
    },
    DayPlan {
        day: 3,
        name: "HIIT Circuit",
        exercises: &[
            ex("Sprint in Place", 6, Described("30s"), "30s"),
            ex("Jump Squats", 3, Count(15), "45s"),
            ex("Plank", 3, Described("60s"), "30s"),
        ],
    },
    DayPlan {
        day: 4,
        name: "Active Recovery",
        exercises: &[
            ex("Yoga/Stretching", 1, Described("30 min"), "-"),
            ex("Light Walking", 1, Described("20 min"), "-"),
        ],
    },
];

pub(super) static MAINTAIN_FITNESS_GYM_BEGINNER: WorkoutTemplate = &[
    DayPlan {
        day: 1,
        name: "Full Body",
        exercises: &[
            ex("Squats", 3, Count(12), "60s"),
            ex("Bench Press", 3, Count(10), "60s"),
            ex("Rows", 3, Count(10), "60s"),
            ex("Shoulder Press", 3, Count(10), "60s"),
        ],
    },
    DayPlan {
        day: 2,
        name: "Cardio",
        exercises: &[
            ex("Running", 1, Described("25 min"), "-"),
            ex("Cycling", 1, Described("15 min"), "-"),
        ],
    },
    DayPlan {
        day: 3,
        name: "Upper Body",
        exercises: &[
            ex("Push-ups", 3, Count(12), "45s"),
            ex("Pull-ups", 3, Count(8), "90s"),
            ex("Dips", 3, Count(10), "60s"),
        ],
    },
    DayPlan {
        day: 4,
        name: "Lower Body",
        exercises: &[
            ex("Squats", 3, Count(15), "60s"),
            ex("Lunges", 3, Count(12), "45s"),
            ex("Leg Press", 3, Count(15), "60s"),
        ],
    },
];

pub(super) static MAINTAIN_FITNESS_HOME_BEGINNER: WorkoutTemplate = &[
    DayPlan {
        day: 1,
        name: "Full Body",
        exercises: &[
            ex("Squats", 3, Count(15), "45s"),
            ex("Push-ups", 3, Count(12), "45s"),
            ex("Plank", 3, Described("45s"), "30s"),
            ex("Lunges", 3, Count(12), "45s"),
        ],
    },
    DayPlan {
        day: 2,
        name: "Cardio",
        exercises: &[
            ex("Jumping Jacks", 3, Count(30), "30s"),
            ex("Burpees", 3, Count(8), "45s"),
            ex("High Knees", 3, Described("30s"), "30s"),
        ],
    },
    DayPlan {
        day: 3,
        name: "Strength",
        exercises: &[
            ex("Push-ups", 4, Count(12), "60s"),
            ex("Bodyweight Squats", 4, Count(15), "60s"),
            ex("Plank", 3, Described("60s"), "45s"),
        ],
    },
    DayPlan {
        day: 4,
        name: "Active Recovery",
        exercises: &[
            ex("Yoga", 1, Described("20 min"), "-"),
            ex("Stretching", 1, Described("15 min"), "-"),
        ],
    },
];
