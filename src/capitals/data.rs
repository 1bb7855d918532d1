//! Built-in region and fun-fact tables.
//!
//! Table order is significant: prefix and substring matches return the
//! first hit in declaration order.

use super::types::{CountryKey, Region};

const US_REGIONS: &[Region] = &[
    Region { name: "Alabama", capital: "Montgomery" },
    Region { name: "Alaska", capital: "Juneau" },
    Region { name: "Arizona", capital: "Phoenix" },
    Region { name: "Arkansas", capital: "Little Rock" },
    Region { name: "California", capital: "Sacramento" },
    Region { name: "Colorado", capital: "Denver" },
    Region { name: "Connecticut", capital: "Hartford" },
    Region { name: "Delaware", capital: "Dover" },
    Region { name: "Florida", capital: "Tallahassee" },
    Region { name: "Georgia", capital: "Atlanta" },
    Region { name: "Hawaii", capital: "Honolulu" },
    Region { name: "Idaho", capital: "Boise" },
    Region { name: "Illinois", capital: "Springfield" },
    Region { name: "Indiana", capital: "Indianapolis" },
    Region { name: "Iowa", capital: "Des Moines" },
    Region { name: "Kansas", capital: "Topeka" },
    Region { name: "Kentucky", capital: "Frankfort" },
    Region { name: "Louisiana", capital: "Baton Rouge" },
    Region { name: "Maine", capital: "Augusta" },
    Region { name: "Maryland", capital: "Annapolis" },
    Region { name: "Massachusetts", capital: "Boston" },
    Region { name: "Michigan", capital: "Lansing" },
    Region { name: "Minnesota", capital: "St. Paul" },
    Region { name: "Mississippi", capital: "Jackson" },
    Region { name: "Missouri", capital: "Jefferson City" },
    Region { name: "Montana", capital: "Helena" },
    Region { name: "Nebraska", capital: "Lincoln" },
    Region { name: "Nevada", capital: "Carson City" },
    Region { name: "New Hampshire", capital: "Concord" },
    Region { name: "New Jersey", capital: "Trenton" },
    Region { name: "New Mexico", capital: "Santa Fe" },
    Region { name: "New York", capital: "Albany" },
    Region { name: "North Carolina", capital: "Raleigh" },
    Region { name: "North Dakota", capital: "Bismarck" },
    Region { name: "Ohio", capital: "Columbus" },
    Region { name: "Oklahoma", capital: "Oklahoma City" },
    Region { name: "Oregon", capital: "Salem" },
    Region { name: "Pennsylvania", capital: "Harrisburg" },
    Region { name: "Rhode Island", capital: "Providence" },
    Region { name: "South Carolina", capital: "Columbia" },
    Region { name: "South Dakota", capital: "Pierre" },
    Region { name: "Tennessee", capital: "Nashville" },
    Region { name: "Texas", capital: "Austin" },
    Region { name: "Utah", capital: "Salt Lake City" },
    Region { name: "Vermont", capital: "Montpelier" },
    Region { name: "Virginia", capital: "Richmond" },
    Region { name: "Washington", capital: "Olympia" },
    Region { name: "West Virginia", capital: "Charleston" },
    Region { name: "Wisconsin", capital: "Madison" },
    Region { name: "Wyoming", capital: "Cheyenne" },
    Region { name: "District of Columbia", capital: "Washington, D.C." },
];

const INDIA_REGIONS: &[Region] = &[
    Region { name: "Andhra Pradesh", capital: "Amaravati" },
    Region { name: "Arunachal Pradesh", capital: "Itanagar" },
    Region { name: "Assam", capital: "Dispur" },
    Region { name: "Bihar", capital: "Patna" },
    Region { name: "Chhattisgarh", capital: "Raipur" },
    Region { name: "Goa", capital: "Panaji" },
    Region { name: "Gujarat", capital: "Gandhinagar" },
    Region { name: "Haryana", capital: "Chandigarh" },
    Region { name: "Himachal Pradesh", capital: "Shimla" },
    Region { name: "Jharkhand", capital: "Ranchi" },
    Region { name: "Karnataka", capital: "Bengaluru" },
    Region { name: "Kerala", capital: "Thiruvananthapuram" },
    Region { name: "Madhya Pradesh", capital: "Bhopal" },
    Region { name: "Maharashtra", capital: "Mumbai" },
    Region { name: "Manipur", capital: "Imphal" },
    Region { name: "Meghalaya", capital: "Shillong" },
    Region { name: "Mizoram", capital: "Aizawl" },
    Region { name: "Nagaland", capital: "Kohima" },
    Region { name: "Odisha", capital: "Bhubaneswar" },
    Region { name: "Punjab", capital: "Chandigarh" },
    Region { name: "Rajasthan", capital: "Jaipur" },
    Region { name: "Sikkim", capital: "Gangtok" },
    Region { name: "Tamil Nadu", capital: "Chennai" },
    Region { name: "Telangana", capital: "Hyderabad" },
    Region { name: "Tripura", capital: "Agartala" },
    Region { name: "Uttar Pradesh", capital: "Lucknow" },
    Region { name: "Uttarakhand", capital: "Dehradun" },
    Region { name: "West Bengal", capital: "Kolkata" },
    Region { name: "Andaman and Nicobar Islands", capital: "Port Blair" },
    Region { name: "Chandigarh (UT)", capital: "Chandigarh" },
    Region { name: "Dadra and Nagar Haveli and Daman and Diu", capital: "Daman" },
    Region { name: "Delhi", capital: "New Delhi" },
    Region { name: "Jammu and Kashmir", capital: "Srinagar" },
    Region { name: "Ladakh", capital: "Leh" },
    Region { name: "Puducherry", capital: "Puducherry" },
    Region { name: "Lakshadweep", capital: "Kavaratti" },
];

const UK_REGIONS: &[Region] = &[
    Region { name: "England", capital: "London" },
    Region { name: "Scotland", capital: "Edinburgh" },
    Region { name: "Wales", capital: "Cardiff" },
    Region { name: "Northern Ireland", capital: "Belfast" },
];

/// Regions of a country in table order.
pub fn regions(country: CountryKey) -> &'static [Region] {
    match country {
        CountryKey::Us => US_REGIONS,
        CountryKey::India => INDIA_REGIONS,
        CountryKey::Uk => UK_REGIONS,
    }
}

const FUN_FACTS: &[(&str, &str)] = &[
    // US
    ("Montgomery", "Montgomery is famous for the Civil Rights movement and has beautiful historic sites."),
    ("Juneau", "Juneau is Alaska's capital and can only be reached by plane or boat!"),
    ("Phoenix", "Phoenix is one of the hottest US cities with desert landscapes and Native American culture."),
    ("Little Rock", "Little Rock is known for its role in Civil Rights history and beautiful parks."),
    ("Sacramento", "Sacramento started as a Gold Rush town and has a historic riverfront."),
    ("Denver", "Denver is nicknamed the \"Mile High City\" because it sits exactly 1 mile above sea level!"),
    ("Hartford", "Hartford is home to the oldest continuously published newspaper in the US."),
    ("Dover", "Dover is one of the oldest cities in the US with colonial-era buildings."),
    ("Tallahassee", "Tallahassee is surrounded by beautiful forests and natural springs."),
    ("Atlanta", "Atlanta is known for being a major hub and played a key role in Civil Rights history."),
    ("Honolulu", "Honolulu is on the island of Oahu and is famous for beaches like Waikiki."),
    ("Boise", "Boise sits in a valley surrounded by mountains and is a great outdoor adventure city."),
    ("Springfield", "Springfield is the capital of Illinois and has lots of Abraham Lincoln sites to visit."),
    ("Indianapolis", "Indianapolis is famous for the Indy 500 car race and has cool racing museums!"),
    ("Des Moines", "Des Moines is in the heart of farm country and has great science museums."),
    ("Topeka", "Topeka is the capital of Kansas and has beautiful sunflower fields nearby."),
    ("Frankfort", "Frankfort is known for bourbon distilleries and historic Main Street."),
    ("Baton Rouge", "Baton Rouge sits on the mighty Mississippi River with Southern charm."),
    ("Augusta", "Augusta is Maine's capital and is close to beautiful lakes and outdoor activities."),
    ("Annapolis", "Annapolis is home to the US Naval Academy and has historic colonial streets."),
    ("Boston", "Boston is famous for the Freedom Trail and being the birthplace of the American Revolution!"),
    ("Lansing", "Lansing is Michigan's capital and is surrounded by Great Lakes and natural beauty."),
    ("St. Paul", "St. Paul sits across the Mississippi River from Minneapolis and has fantastic museums."),
    ("Jackson", "Jackson is Mississippi's capital and has important Civil Rights museums."),
    ("Jefferson City", "Jefferson City sits on the Missouri River and is named after Thomas Jefferson."),
    ("Helena", "Helena is Montana's capital surrounded by beautiful mountains and outdoor adventures."),
    ("Lincoln", "Lincoln is Nebraska's capital and is home to the Cornhuskers university."),
    ("Carson City", "Carson City is Nevada's capital and was named after the famous frontiersman Kit Carson."),
    ("Concord", "Concord is New Hampshire's capital and has a beautiful state house building."),
    ("Trenton", "Trenton sits on the Delaware River and has important Revolutionary War history."),
    ("Santa Fe", "Santa Fe has beautiful Pueblo-style architecture and amazing art galleries and museums!"),
    ("Albany", "Albany is one of the oldest surviving settlements of the original British thirteen colonies."),
    ("Raleigh", "Raleigh is North Carolina's capital and has beautiful museums and gardens."),
    ("Bismarck", "Bismarck is North Dakota's capital on the Missouri River with scenic views."),
    ("Columbus", "Columbus is Ohio's largest city and has great science and natural history museums."),
    ("Oklahoma City", "Oklahoma City has a fascinating history and beautiful memorials."),
    ("Salem", "Salem is Oregon's capital and was founded as a fur trading post."),
    ("Harrisburg", "Harrisburg sits on the Susquehanna River and has historic Pennsylvania history."),
    ("Providence", "Providence is Rhode Island's capital and has beautiful colonial architecture."),
    ("Columbia", "Columbia is South Carolina's capital and has beautiful historic districts."),
    ("Pierre", "Pierre is South Dakota's capital and sits on the Missouri River."),
    ("Nashville", "Nashville is famous as \"Music City USA\" and has the Grand Ole Opry!"),
    ("Austin", "Austin is famous for live music and concerts — 'Keep Austin Weird' is its motto!"),
    ("Salt Lake City", "Salt Lake City is surrounded by mountains and hosted the 2002 Winter Olympics."),
    ("Montpelier", "Montpelier is Vermont's capital and is surrounded by beautiful forests and mountains."),
    ("Richmond", "Richmond is Virginia's capital and has important American history and museums."),
    ("Olympia", "Olympia is Washington's capital and sits on Puget Sound with scenic views."),
    ("Charleston", "Charleston is West Virginia's capital and sits on the Kanawha River."),
    ("Madison", "Madison is Wisconsin's capital and sits between two beautiful lakes."),
    ("Cheyenne", "Cheyenne is Wyoming's capital and has a great frontier heritage."),
    ("Washington, D.C.", "Washington, D.C. is the capital of the USA and has amazing free museums and monuments!"),
    // India
    ("Amaravati", "Amaravati is an ancient city with temples and is known for silk production."),
    ("Itanagar", "Itanagar is surrounded by mountains and forests in northeast India."),
    ("Dispur", "Dispur is Assam's capital and is known for tea gardens nearby."),
    ("Patna", "Patna is an ancient city on the Ganges River with Buddhist heritage sites."),
    ("Raipur", "Raipur is known for steel production and has beautiful temples."),
    ("Panaji", "Panaji is a beautiful coastal city with Portuguese colonial architecture."),
    ("Gandhinagar", "Gandhinagar is a planned city named after Mahatma Gandhi."),
    ("Chandigarh", "Chandigarh is a beautiful planned city with great architecture and gardens."),
    ("Shimla", "Shimla is a hill station with cool weather and beautiful mountain views!"),
    ("Ranchi", "Ranchi is surrounded by waterfalls and beautiful natural scenery."),
    ("Bengaluru", "Bengaluru is India's tech hub — the \"Silicon Valley of India\" with IT companies!"),
    ("Thiruvananthapuram", "Thiruvananthapuram has beautiful beaches and is known for spices."),
    ("Bhopal", "Bhopal is known for beautiful lakes and historic palaces."),
    ("Mumbai", "Mumbai is India's largest city and is famous for Bollywood movies!"),
    ("Imphal", "Imphal is in a beautiful valley surrounded by mountains."),
    ("Shillong", "Shillong is a hill station known as the \"Scotland of the East\" with cool weather."),
    ("Aizawl", "Aizawl is a beautiful hill city with scenic mountain views."),
    ("Kohima", "Kohima is a hill station surrounded by beautiful landscapes."),
    ("Bhubaneswar", "Bhubaneswar is known for ancient temples and beautiful beaches nearby."),
    ("Jaipur", "Jaipur is the famous \"Pink City\" with beautiful palaces and amazing forts nearby!"),
    ("Gangtok", "Gangtok is a hill station with mountain views and Buddhist monasteries."),
    ("Chennai", "Chennai has beautiful temples and a long coastline on the Bay of Bengal."),
    ("Hyderabad", "Hyderabad is known for pearls, biryani food, and IT industry."),
    ("Agartala", "Agartala is known for beautiful palaces and temples."),
    ("Lucknow", "Lucknow is known for beautiful Mughal architecture and amazing biryani food!"),
    ("Dehradun", "Dehradun is a hill city with yoga centers and nature all around."),
    ("Kolkata", "Kolkata is known for literature, art, and is the \"City of Joy\"!"),
    ("Port Blair", "Port Blair is on the Andaman Islands with beautiful beaches."),
    ("Daman", "Daman has beautiful beaches and Portuguese colonial architecture."),
    ("New Delhi", "New Delhi is India's capital with India Gate, palaces, and amazing monuments!"),
    ("Srinagar", "Srinagar is in Kashmir and is famous for beautiful houseboats and gardens."),
    ("Leh", "Leh is high in the mountains of Ladakh with amazing trekking and Buddhist sites."),
    ("Puducherry", "Puducherry has beautiful beaches and French colonial architecture."),
    ("Kavaratti", "Kavaratti is in the Lakshadweep Islands with beautiful tropical beaches."),
    // UK
    ("London", "London has the famous River Thames and is full of history back to Roman times!"),
    ("Edinburgh", "Edinburgh has a castle on a volcanic rock — great for imagining knights and history!"),
    ("Cardiff", "Cardiff is Wales' capital and has beautiful castles and museums."),
    ("Belfast", "Belfast is Northern Ireland's capital with historic architecture and museums."),
];

/// Look up the curated fact for a capital, if one exists.
pub fn builtin_fact(capital: &str) -> Option<&'static str> {
    FUN_FACTS
        .iter()
        .find(|(name, _)| *name == capital)
        .map(|(_, fact)| *fact)
}
